use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{AuthToken, AuthenticatedUser, Credentials};

/// Exchanges credentials for an ID token.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

/// Validates an ID token presented as a bearer credential.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
