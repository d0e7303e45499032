use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::sale::repository::SaleRepository;

use crate::api::tags::ApiTags;

/// Liveness report
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy", or "degraded" when the datamart cannot be read
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Sales rows loaded at startup
    pub datamart_rows: u64,
}

pub struct Api {
    sales: Arc<dyn SaleRepository>,
}

impl Api {
    pub fn new(sales: Arc<dyn SaleRepository>) -> Self {
        Self { sales }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Used by the hosting platform's router. Public, no token needed.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let (status, rows) = match self.sales.count().await {
            Ok(rows) => ("healthy", rows),
            Err(e) => {
                tracing::warn!("Datamart unreadable during health check: {e}");
                ("degraded", 0)
            }
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            datamart_rows: rows as u64,
        })
    }
}
