use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};

use crate::api::auth::dto::{LoginRequest, TokenResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(login_use_case: Arc<dyn LoginUseCase>) -> Self {
        Self { login_use_case }
    }
}

/// Authentication API
#[OpenApi]
impl AuthApi {
    /// User login
    ///
    /// Authenticates a user against Firebase and returns an ID token.
    /// This endpoint is public.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            credentials: body.0.into(),
        };

        match self.login_use_case.execute(params).await {
            Ok(token) => LoginResponse::Ok(Json(token.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginResponse::BadRequest(json),
                    _ => LoginResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<TokenResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
