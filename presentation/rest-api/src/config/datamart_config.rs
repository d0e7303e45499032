use datamart::loader::{DatamartConfig, load_sales};
use datamart::sale::repository::SaleRepositoryInMemory;
use std::env;
use std::path::PathBuf;

/// Location of the sales datamart
#[derive(Debug, Clone)]
pub struct DatamartSettings {
    pub path: PathBuf,
}

impl DatamartSettings {
    /// Environment variables:
    /// - DATAMART_PATH: Directory holding `data_chunk*.parquet` / `data_chunk*.json` files (default: "data")
    pub fn from_env() -> Self {
        let path = env::var("DATAMART_PATH").unwrap_or_else(|_| "data".to_string());
        Self {
            path: PathBuf::from(path),
        }
    }
}

/// Load the datamart into memory
///
/// # Errors
/// Returns error if the directory is missing or a chunk cannot be parsed
pub async fn init_datamart(settings: &DatamartSettings) -> anyhow::Result<SaleRepositoryInMemory> {
    let records = load_sales(&DatamartConfig::new(&settings.path)).await?;
    Ok(SaleRepositoryInMemory::new(records))
}
