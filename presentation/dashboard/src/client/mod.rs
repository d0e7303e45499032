pub mod error;
pub mod sales_api;
