use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::SaleRecord;
use crate::domain::sale::repository::SaleRepository;
use crate::domain::sale::use_cases::search::{SearchSalesParams, SearchSalesUseCase};
use crate::domain::sale::value_objects::DateRange;

pub struct SearchSalesUseCaseImpl {
    pub repository: Arc<dyn SaleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchSalesUseCase for SearchSalesUseCaseImpl {
    async fn execute(&self, params: SearchSalesParams) -> Result<Vec<SaleRecord>, SaleError> {
        let range = DateRange::parse(&params.start_date, &params.end_date)?;
        self.logger.info(&format!(
            "Searching sales by {} {} from {} to {}",
            params.dimension, params.key, range.start, range.end
        ));

        let sales = self
            .repository
            .find_by_key_in_range(params.dimension, &params.key, &range)
            .await?;

        if sales.is_empty() {
            self.logger.debug(&format!(
                "No sales for {} {} in range",
                params.dimension, params.key
            ));
            return Err(SaleError::NotFoundInRange(params.dimension));
        }

        self.logger.info(&format!("Found {} sales", sales.len()));
        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::sale::model::{SalesDimension, Ticket};
    use chrono::NaiveDate;
    use mockall::mock;
    use serde_json::Map;

    mock! {
        pub SaleRepo {}

        #[async_trait]
        impl SaleRepository for SaleRepo {
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
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sale(employee: &str, day: u32) -> SaleRecord {
        SaleRecord {
            key_date: NaiveDate::from_ymd_opt(2023, 11, day).unwrap(),
            key_employee: employee.to_string(),
            key_product: "1|44733".to_string(),
            key_store: "1|023".to_string(),
            ticket: Ticket {
                net_amount: 15.0,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    fn params(start_date: &str, end_date: &str) -> SearchSalesParams {
        SearchSalesParams {
            dimension: SalesDimension::Employee,
            key: "1|343".to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_sales_when_employee_sold_in_range() {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo
            .expect_find_by_key_in_range()
            .withf(|dimension, key, range| {
                *dimension == SalesDimension::Employee
                    && key == "1|343"
                    && range.start == NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
                    && range.end == NaiveDate::from_ymd_opt(2023, 11, 3).unwrap()
            })
            .returning(|_, _, _| Ok(vec![sale("1|343", 1), sale("1|343", 3)]));

        let use_case = SearchSalesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("2023-11-01", "2023-11-03")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_range_has_no_sales() {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo
            .expect_find_by_key_in_range()
            .returning(|_, _, _| Ok(vec![]));

        let use_case = SearchSalesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("2023-11-01", "2023-11-03")).await;

        assert!(matches!(
            result.unwrap_err(),
            SaleError::NotFoundInRange(SalesDimension::Employee)
        ));
    }

    #[tokio::test]
    async fn should_reject_dates_before_querying_repository() {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo.expect_find_by_key_in_range().never();

        let use_case = SearchSalesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("2023/11/01", "2023-11-03")).await;

        assert!(matches!(result.unwrap_err(), SaleError::InvalidDateFormat));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockSaleRepo::new();
        mock_repo
            .expect_find_by_key_in_range()
            .returning(|_, _, _| Err(RepositoryError::Unavailable));

        let use_case = SearchSalesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("2023-11-01", "2023-11-03")).await;

        assert!(matches!(result.unwrap_err(), SaleError::Repository(_)));
    }
}
