use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SaleRecord;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::first_record::FirstRecordUseCase;

pub struct FirstRecordUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FirstRecordUseCase for FirstRecordUseCaseImpl {
    async fn execute(&self) -> Result<SaleRecord, SaleError> {
        self.logger.info("Fetching first datamart record");
        match self.repository.first().await? {
            Some(record) => Ok(record),
            None => {
                self.logger.warn("Datamart is empty");
                Err(SaleError::NoData)
            }
        }
    }
}
