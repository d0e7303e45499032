use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{AuthToken, Credentials};

pub struct LoginParams {
    pub credentials: Credentials,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<AuthToken, AuthError>;
}
