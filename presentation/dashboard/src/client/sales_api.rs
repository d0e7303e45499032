use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::action::DashboardAction;
use crate::client::error::ClientError;

/// What the API answered to a dashboard query.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Ok(Value),
    Failed { status: u16, body: String },
}

impl ApiReply {
    /// Text shown under the query form.
    pub fn render(&self) -> String {
        match self {
            ApiReply::Ok(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ApiReply::Failed { status, body } => format!("Error: {} - {}", status, body),
        }
    }
}

#[async_trait]
pub trait SalesBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError>;

    async fn query(
        &self,
        action: DashboardAction,
        params: &[(&'static str, String)],
        token: &str,
    ) -> Result<ApiReply, ClientError>;
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// reqwest client for the sales REST API.
pub struct SalesApiClient {
    client: Client,
    base_url: Url,
}

impl SalesApiClient {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }
}

/// Pulls the human readable part out of an API error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl SalesBackend for SalesApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/auth/login")?)
            .json(&LoginBody { email, password })
            .send()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::LoginRejected(error_message(&body)));
        }

        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| value.get("token").and_then(Value::as_str).map(str::to_string))
            .ok_or_else(|| ClientError::LoginRejected("missing token in response".to_string()))
    }

    async fn query(
        &self,
        action: DashboardAction,
        params: &[(&'static str, String)],
        token: &str,
    ) -> Result<ApiReply, ClientError> {
        tracing::debug!(%action, "Forwarding dashboard query");

        let response = self
            .client
            .get(self.endpoint(action.path())?)
            .bearer_auth(token)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        if status == 200 {
            let value = serde_json::from_str(&body).unwrap_or(Value::String(body));
            Ok(ApiReply::Ok(value))
        } else {
            tracing::warn!(%action, status, "Sales API rejected dashboard query");
            Ok(ApiReply::Failed { status, body })
        }
    }
}
