use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::sale::model::{SaleRecord, SalesDimension};
use business::domain::sale::repository::SaleRepository;
use business::domain::sale::value_objects::DateRange;

/// Read-only repository over the datamart loaded at startup.
pub struct SaleRepositoryInMemory {
    records: Arc<Vec<SaleRecord>>,
}

impl SaleRepositoryInMemory {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching<'a>(
        &'a self,
        dimension: SalesDimension,
        key: &'a str,
    ) -> impl Iterator<Item = &'a SaleRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.key(dimension) == key)
    }
}

#[async_trait]
impl SaleRepository for SaleRepositoryInMemory {
    async fn find_by_key(
        &self,
        dimension: SalesDimension,
        key: &str,
    ) -> Result<Vec<SaleRecord>, RepositoryError> {
        Ok(self.matching(dimension, key).cloned().collect())
    }

    async fn find_by_key_in_range(
        &self,
        dimension: SalesDimension,
        key: &str,
        range: &DateRange,
    ) -> Result<Vec<SaleRecord>, RepositoryError> {
        Ok(self
            .matching(dimension, key)
            .filter(|record| range.contains(record.key_date))
            .cloned()
            .collect())
    }

    async fn first(&self) -> Result<Option<SaleRecord>, RepositoryError> {
        Ok(self.records.first().cloned())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.len())
    }
}
