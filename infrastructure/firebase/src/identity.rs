use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AuthToken, Credentials};
use business::domain::auth::services::IdentityProvider;

use crate::client::FirebaseClient;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
}

#[derive(Deserialize)]
struct IdentityErrorResponse {
    error: IdentityErrorBody,
}

#[derive(Deserialize)]
struct IdentityErrorBody {
    message: String,
}

/// Email/password sign-in through the Identity Toolkit REST API.
pub struct IdentityProviderFirebase {
    client: FirebaseClient,
}

impl IdentityProviderFirebase {
    pub fn new(client: FirebaseClient) -> Self {
        Self { client }
    }

    /// Pulls the provider's reason code out of an error body. Falls back to the
    /// raw body so the caller still sees something useful.
    fn rejection_message(body: &str) -> String {
        serde_json::from_str::<IdentityErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait]
impl IdentityProvider for IdentityProviderFirebase {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let url = self
            .client
            .sign_in_url()
            .map_err(|_| AuthError::ProviderUnavailable)?;

        let body = json!({
            "email": credentials.email,
            "password": credentials.password,
            "returnSecureToken": true,
        });

        let response = self
            .client
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity Toolkit request failed: {e}");
                AuthError::ProviderUnavailable
            })?;

        let status = response.status();
        if status.is_client_error() {
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::SignInRejected(Self::rejection_message(&text)));
        }
        if !status.is_success() {
            tracing::error!("Identity Toolkit answered {status}");
            return Err(AuthError::ProviderUnavailable);
        }

        let data: SignInResponse = response.json().await.map_err(|e| {
            tracing::error!("Identity Toolkit response unreadable: {e}");
            AuthError::ProviderUnavailable
        })?;

        Ok(AuthToken::new(data.id_token))
    }
}
