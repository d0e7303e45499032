use super::model::SalesDimension;

#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale.invalid_date_format")]
    InvalidDateFormat,
    #[error("sale.not_found_in_range")]
    NotFoundInRange(SalesDimension),
    #[error("sale.not_found")]
    NotFound(SalesDimension),
    #[error("sale.no_data")]
    NoData,
    #[error("repository.unavailable")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
