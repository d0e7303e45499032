use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{SaleRecord, SalesDimension};
use super::value_objects::DateRange;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn find_by_key(
        &self,
        dimension: SalesDimension,
        key: &str,
    ) -> Result<Vec<SaleRecord>, RepositoryError>;
    async fn find_by_key_in_range(
        &self,
        dimension: SalesDimension,
        key: &str,
        range: &DateRange,
    ) -> Result<Vec<SaleRecord>, RepositoryError>;
    async fn first(&self) -> Result<Option<SaleRecord>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
