use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::MissingCredentials => (StatusCode::BAD_REQUEST, "ValidationError"),
            AuthError::SignInRejected(_) => (StatusCode::BAD_REQUEST, "AuthenticationError"),
            AuthError::ProviderUnavailable => (StatusCode::BAD_GATEWAY, "ProviderError"),
            AuthError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "AuthenticationError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
