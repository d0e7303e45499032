use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the routed application without binding a socket.
    pub fn app(cors: Cors, container: DependencyContainer, public_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.auth_api, container.sale_api),
            "Sales API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
            .data(container.token_verifier)
            .with(NormalizePath::new(TrailingSlash::Trim))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = format!("http://{}", addr);
        let app = Self::app(config.cors, container, &public_url);

        tracing::info!("Server running at {}", public_url);
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::{Map, json};

    use business::domain::auth::errors::AuthError;
    use business::domain::auth::model::{AuthToken, AuthenticatedUser, Credentials};
    use business::domain::auth::services::{IdentityProvider, TokenVerifier};
    use business::domain::sale::model::{SaleRecord, Ticket};
    use datamart::sale::repository::SaleRepositoryInMemory;
    use firebase::settings::{FirebaseSettings, REQUIRED_KEYS};

    use super::*;

    const GOOD_TOKEN: &str = "good-token";

    struct FakeIdentityProvider;

    #[async_trait]
    impl IdentityProvider for FakeIdentityProvider {
        async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
            if credentials.password == "secret" {
                Ok(AuthToken::new(GOOD_TOKEN))
            } else {
                Err(AuthError::SignInRejected(
                    "INVALID_LOGIN_CREDENTIALS".to_string(),
                ))
            }
        }
    }

    struct FakeTokenVerifier;

    #[async_trait]
    impl TokenVerifier for FakeTokenVerifier {
        async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            if token == GOOD_TOKEN {
                Ok(AuthenticatedUser {
                    uid: "firebase-uid-123".to_string(),
                    email: Some("analyst@mail.com".to_string()),
                })
            } else {
                Err(AuthError::InvalidToken("unknown_kid".to_string()))
            }
        }
    }

    fn sale(date: (i32, u32, u32), store: &str, amount: f64) -> SaleRecord {
        SaleRecord {
            key_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            key_employee: "1|343".to_string(),
            key_product: "1|44733".to_string(),
            key_store: store.to_string(),
            ticket: Ticket {
                net_amount: amount,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    fn sales() -> SaleRepositoryInMemory {
        SaleRepositoryInMemory::new(vec![
            sale((2023, 11, 1), "1|023", 1000.0),
            sale((2023, 11, 2), "1|023", 234.56),
            sale((2023, 11, 3), "1|099", 10.0),
        ])
    }

    fn client_with(repository: SaleRepositoryInMemory) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::with_adapters(
            Arc::new(repository),
            Arc::new(FakeIdentityProvider),
            Arc::new(FakeTokenVerifier),
        );
        TestClient::new(Server::app(Cors::new(), container, "http://127.0.0.1:8000"))
    }

    fn client() -> TestClient<impl Endpoint> {
        client_with(sales())
    }

    fn bearer() -> String {
        format!("Bearer {}", GOOD_TOKEN)
    }

    #[tokio::test]
    async fn should_build_app_from_placeholder_configuration_record() {
        let env: HashMap<&str, String> = REQUIRED_KEYS
            .iter()
            .map(|key| (key.name, format!("placeholder-{}", key.name.to_lowercase())))
            .collect();
        let settings = FirebaseSettings::from_lookup(|key| env.get(key).cloned()).unwrap();

        let container = DependencyContainer::new(&settings, sales());
        let cli = TestClient::new(Server::app(Cors::new(), container, "http://127.0.0.1:8000"));

        let resp = cli.get("/health").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("status").assert_string("healthy");
        body.get("datamart_rows").assert_i64(3);
    }

    #[tokio::test]
    async fn should_serve_openapi_document_without_token() {
        let resp = client().get("/openapi.json").send().await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_token_when_login_succeeds() {
        let resp = client()
            .post("/auth/login")
            .body_json(&json!({ "email": "analyst@mail.com", "password": "secret" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("token")
            .assert_string(GOOD_TOKEN);
    }

    #[tokio::test]
    async fn should_carry_provider_reason_when_login_is_rejected() {
        let resp = client()
            .post("/auth/login")
            .body_json(&json!({ "email": "analyst@mail.com", "password": "wrong" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("auth.sign_in_rejected: INVALID_LOGIN_CREDENTIALS");
    }

    #[tokio::test]
    async fn should_reject_sales_request_without_token() {
        let resp = client().get("/sales/first_record").send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_sales_request_with_invalid_token() {
        let resp = client()
            .get("/sales/first_record")
            .header("Authorization", "Bearer forged")
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_return_sales_in_inclusive_date_range() {
        let resp = client()
            .get("/sales/store")
            .header("Authorization", bearer())
            .query("key_store", &"1|023")
            .query("start_date", &"2023-11-01")
            .query("end_date", &"2023-11-02")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_accept_trailing_slash_on_sales_routes() {
        let resp = client()
            .get("/sales/store/")
            .header("Authorization", bearer())
            .query("key_store", &"1|023")
            .query("start_date", &"2023-11-01")
            .query("end_date", &"2023-11-01")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(1);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_date_is_malformed() {
        let resp = client()
            .get("/sales/employee")
            .header("Authorization", bearer())
            .query("key_employee", &"1|343")
            .query("start_date", &"01-11-2023")
            .query("end_date", &"2023-11-02")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_when_nothing_matches_range() {
        let resp = client()
            .get("/sales/product")
            .header("Authorization", bearer())
            .query("key_product", &"1|44733")
            .query("start_date", &"2024-01-01")
            .query("end_date", &"2024-01-31")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_formatted_totals_for_store() {
        let resp = client()
            .get("/sales/store/total_avg")
            .header("Authorization", bearer())
            .query("key_store", &"1|023")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("total_sales").assert_string("$1,234.56");
        body.get("average_sales").assert_string("$617.28");
    }

    #[tokio::test]
    async fn should_return_not_found_when_totals_key_is_unknown() {
        let resp = client()
            .get("/sales/employee/total_avg")
            .header("Authorization", bearer())
            .query("key_employee", &"9|999")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_first_record_with_column_names() {
        let resp = client()
            .get("/sales/first_record")
            .header("Authorization", bearer())
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("KeyDate").assert_string("2023-11-01");
        body.get("KeyStore").assert_string("1|023");
    }

    #[tokio::test]
    async fn should_return_not_found_when_datamart_is_empty() {
        let resp = client_with(SaleRepositoryInMemory::new(Vec::new()))
            .get("/sales/first_record")
            .header("Authorization", bearer())
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
