use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::{SaleRecord, SalesDimension};

pub struct SearchSalesParams {
    pub dimension: SalesDimension,
    pub key: String,
    pub start_date: String,
    pub end_date: String,
}

#[async_trait]
pub trait SearchSalesUseCase: Send + Sync {
    async fn execute(&self, params: SearchSalesParams) -> Result<Vec<SaleRecord>, SaleError>;
}
