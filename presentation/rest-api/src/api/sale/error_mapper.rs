use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::sale::errors::SaleError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SaleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SaleError::InvalidDateFormat => (StatusCode::BAD_REQUEST, "ValidationError"),
            SaleError::NotFoundInRange(_) | SaleError::NotFound(_) | SaleError::NoData => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            SaleError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        let message = match &self {
            SaleError::NotFoundInRange(dimension) | SaleError::NotFound(dimension) => {
                format!("{}.{}", self, dimension)
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
