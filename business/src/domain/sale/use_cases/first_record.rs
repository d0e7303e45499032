use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SaleRecord;

#[async_trait]
pub trait FirstRecordUseCase: Send + Sync {
    async fn execute(&self) -> Result<SaleRecord, SaleError>;
}
