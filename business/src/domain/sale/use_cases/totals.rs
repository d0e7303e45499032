use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SalesDimension;
use crate::domain::sale::value_objects::SalesSummary;

pub struct SalesTotalsParams {
    pub dimension: SalesDimension,
    pub key: String,
}

#[async_trait]
pub trait SalesTotalsUseCase: Send + Sync {
    async fn execute(&self, params: SalesTotalsParams) -> Result<SalesSummary, SaleError>;
}
