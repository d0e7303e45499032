use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::totals::{SalesTotalsParams, SalesTotalsUseCase};
use crate::domain::sale::value_objects::SalesSummary;

pub struct SalesTotalsUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SalesTotalsUseCase for SalesTotalsUseCaseImpl {
    async fn execute(&self, params: SalesTotalsParams) -> Result<SalesSummary, SaleError> {
        self.logger.info(&format!(
            "Computing sales totals for {} {}",
            params.dimension, params.key
        ));

        let sales = self
            .repository
            .find_by_key(params.dimension, &params.key)
            .await?;

        let summary =
            SalesSummary::from_records(&sales).ok_or(SaleError::NotFound(params.dimension))?;

        self.logger.info(&format!(
            "Summarized {} sales: total {}, average {}",
            summary.count, summary.total, summary.average
        ));
        Ok(summary)
    }
}
