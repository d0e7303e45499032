use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::AuthToken;
use crate::domain::auth::services::IdentityProvider;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub provider: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthToken, AuthError> {
        let credentials = params.credentials;
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        self.logger
            .info(&format!("Signing in user {}", credentials.email));

        match self.provider.sign_in(&credentials).await {
            Ok(token) => {
                self.logger
                    .info(&format!("User {} signed in", credentials.email));
                Ok(token)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Sign-in failed for {}: {}",
                    credentials.email, err
                ));
                Err(err)
            }
        }
    }
}
