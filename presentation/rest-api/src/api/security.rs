use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;

use business::domain::auth::model::AuthenticatedUser;
use business::domain::auth::services::TokenVerifier;

/// Firebase Bearer token authentication
///
/// The verifier is looked up in request data, installed by the server setup.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub AuthenticatedUser);

async fn firebase_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(verifier) = req.data::<Arc<dyn TokenVerifier>>() else {
        tracing::error!("No token verifier installed on the request");
        return None;
    };

    match verifier.verify(&bearer.token).await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}
