use poem_openapi::Object;

use business::domain::auth::model::{AuthToken, Credentials};

#[derive(Clone, Object)]
pub struct LoginRequest {
    /// Account email
    #[oai(validator(max_length = 320))]
    pub email: String,
    /// Account password
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TokenResponse {
    /// Firebase ID token, sent back as `Authorization: Bearer <token>`
    pub token: String,
}

impl From<AuthToken> for TokenResponse {
    fn from(token: AuthToken) -> Self {
        Self {
            token: token.into_inner(),
        }
    }
}
