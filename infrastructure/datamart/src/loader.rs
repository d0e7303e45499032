use std::path::{Path, PathBuf};

use arrow_array::RecordBatch;
use arrow_json::ArrayWriter;
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use business::domain::sale::model::SaleRecord;

use crate::sale::entity::SaleEntity;

#[derive(Error, Debug)]
pub enum DatamartError {
    #[error("datamart.directory_not_found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("datamart.read_error: {0}")]
    ReadError(PathBuf),
    #[error("datamart.parse_error: {path} ({reason})")]
    ParseError { path: PathBuf, reason: String },
    #[error("datamart.invalid_record: {path} row {row}")]
    InvalidRecord { path: PathBuf, row: usize },
}

/// Encoding of a chunk file, picked from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkFormat {
    Parquet,
    Json,
}

impl ChunkFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("parquet") => Some(Self::Parquet),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where the datamart chunk files live
pub struct DatamartConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
}

impl DatamartConfig {
    /// Creates a configuration matching `data_chunk*.parquet` and `data_chunk*.json` in `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: "data_chunk".to_string(),
        }
    }

    fn format_of(&self, path: &Path) -> Option<ChunkFormat> {
        let name = path.file_name().and_then(|n| n.to_str())?;
        if !name.starts_with(&self.file_prefix) {
            return None;
        }
        ChunkFormat::from_path(path)
    }
}

/// Lists the chunk files in name order
async fn chunk_files(
    config: &DatamartConfig,
) -> Result<Vec<(PathBuf, ChunkFormat)>, DatamartError> {
    let mut entries = tokio::fs::read_dir(&config.directory)
        .await
        .map_err(|_| DatamartError::DirectoryNotFound(config.directory.clone()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|_| DatamartError::ReadError(config.directory.clone()))?
    {
        let path = entry.path();
        if let Some(format) = config.format_of(&path) {
            files.push((path, format));
        }
    }
    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}

fn parse_error(path: &Path, reason: impl ToString) -> DatamartError {
    DatamartError::ParseError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Renders a record batch as a JSON array of row objects
fn batch_entities(path: &Path, batch: &RecordBatch) -> Result<Vec<SaleEntity>, DatamartError> {
    if batch.num_rows() == 0 {
        return Ok(Vec::new());
    }
    let mut writer = ArrayWriter::new(Vec::new());
    writer.write(batch).map_err(|e| parse_error(path, e))?;
    writer.finish().map_err(|e| parse_error(path, e))?;
    serde_json::from_slice(&writer.into_inner()).map_err(|e| parse_error(path, e))
}

fn parquet_entities(path: &Path, bytes: Vec<u8>) -> Result<Vec<SaleEntity>, DatamartError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(bytes))
        .and_then(|builder| builder.build())
        .map_err(|e| parse_error(path, e))?;

    let mut entities = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| parse_error(path, e))?;
        entities.extend(batch_entities(path, &batch)?);
    }
    Ok(entities)
}

async fn read_chunk(path: &Path, format: ChunkFormat) -> Result<Vec<SaleRecord>, DatamartError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|_| DatamartError::ReadError(path.to_path_buf()))?;

    let entities = match format {
        ChunkFormat::Parquet => parquet_entities(path, bytes)?,
        ChunkFormat::Json => serde_json::from_slice(&bytes).map_err(|e| parse_error(path, e))?,
    };

    entities
        .into_iter()
        .enumerate()
        .map(|(row, entity)| {
            entity.into_domain().ok_or(DatamartError::InvalidRecord {
                path: path.to_path_buf(),
                row,
            })
        })
        .collect()
}

/// Loads and concatenates every chunk file into one in-memory table
pub async fn load_sales(config: &DatamartConfig) -> Result<Vec<SaleRecord>, DatamartError> {
    let files = chunk_files(config).await?;
    if files.is_empty() {
        tracing::warn!(
            directory = %config.directory.display(),
            "No datamart chunk files found, serving an empty datamart"
        );
    }

    let mut records = Vec::new();
    for (path, format) in &files {
        let chunk = read_chunk(path, *format).await?;
        tracing::debug!(file = %path.display(), rows = chunk.len(), "Loaded datamart chunk");
        records.extend(chunk);
    }

    tracing::info!(
        files = files.len(),
        rows = records.len(),
        "Datamart loaded"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow_array::{ArrayRef, Float64Array, StringArray, StructArray, TimestampNanosecondArray};
    use arrow_schema::{DataType, Field};
    use parquet::arrow::ArrowWriter;
    use parquet::basic::Compression;
    use parquet::file::properties::WriterProperties;

    // 2023-11-01T00:00:00 and 2023-11-03T00:00:00
    const NOV_1_NANOS: i64 = 1_698_796_800_000_000_000;
    const NOV_3_NANOS: i64 = 1_698_969_600_000_000_000;

    fn write_parquet_chunk(path: &Path) {
        let tickets = StructArray::from(vec![
            (
                Arc::new(Field::new("NetAmount", DataType::Float64, false)),
                Arc::new(Float64Array::from(vec![12.5, 3.25])) as ArrayRef,
            ),
            (
                Arc::new(Field::new("Units", DataType::Float64, false)),
                Arc::new(Float64Array::from(vec![2.5, 1.5])) as ArrayRef,
            ),
        ]);
        let batch = RecordBatch::try_from_iter(vec![
            (
                "KeyDate",
                Arc::new(TimestampNanosecondArray::from(vec![
                    NOV_1_NANOS,
                    NOV_3_NANOS,
                ])) as ArrayRef,
            ),
            (
                "KeyEmployee",
                Arc::new(StringArray::from(vec!["1|343", "1|344"])) as ArrayRef,
            ),
            (
                "KeyProduct",
                Arc::new(StringArray::from(vec!["1|44733", "1|44733"])) as ArrayRef,
            ),
            (
                "KeyStore",
                Arc::new(StringArray::from(vec!["1|023", "1|099"])) as ArrayRef,
            ),
            ("Tickets", Arc::new(tickets) as ArrayRef),
        ])
        .unwrap();

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let file = std::fs::File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    fn row(employee: &str, date: &str, amount: f64) -> String {
        format!(
            r#"{{"KeyDate":"{date}","KeyEmployee":"{employee}","KeyProduct":"1|44733","KeyStore":"1|023","Tickets":{{"NetAmount":{amount}}}}}"#
        )
    }

    #[tokio::test]
    async fn should_concatenate_chunks_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("data_chunk_2.json"),
            format!("[{}]", row("2|001", "2023-11-02", 5.0)),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("data_chunk_1.json"),
            format!(
                "[{},{}]",
                row("1|343", "2023-11-01", 1.0),
                row("1|344", "2023-11-01", 2.0)
            ),
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.json"), "not json").unwrap();
        std::fs::write(dir.path().join("data_chunk_3.csv"), "a,b").unwrap();

        let records = load_sales(&DatamartConfig::new(dir.path())).await.unwrap();

        let employees: Vec<&str> = records.iter().map(|r| r.key_employee.as_str()).collect();
        assert_eq!(employees, vec!["1|343", "1|344", "2|001"]);
    }

    #[tokio::test]
    async fn should_return_empty_datamart_when_no_chunks_exist() {
        let dir = tempfile::tempdir().unwrap();

        let records = load_sales(&DatamartConfig::new(dir.path())).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = load_sales(&DatamartConfig::new(&missing)).await;

        assert!(matches!(result, Err(DatamartError::DirectoryNotFound(_))));
    }

    #[tokio::test]
    async fn should_fail_when_chunk_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data_chunk_1.json"), "[{\"KeyDate\":").unwrap();

        let result = load_sales(&DatamartConfig::new(dir.path())).await;

        assert!(matches!(result, Err(DatamartError::ParseError { .. })));
    }

    #[tokio::test]
    async fn should_report_row_with_invalid_date() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("data_chunk_1.json"),
            format!(
                "[{},{}]",
                row("1|343", "2023-11-01", 1.0),
                row("1|343", "someday", 1.0)
            ),
        )
        .unwrap();

        let result = load_sales(&DatamartConfig::new(dir.path())).await;

        assert!(matches!(
            result,
            Err(DatamartError::InvalidRecord { row: 1, .. })
        ));
    }

    #[tokio::test]
    async fn should_load_snappy_parquet_chunks() {
        let dir = tempfile::tempdir().unwrap();
        write_parquet_chunk(&dir.path().join("data_chunk_000.snappy.parquet"));

        let records = load_sales(&DatamartConfig::new(dir.path())).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].key_date,
            chrono::NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
        );
        assert_eq!(
            records[1].key_date,
            chrono::NaiveDate::from_ymd_opt(2023, 11, 3).unwrap()
        );
        assert_eq!(records[1].key_store, "1|099");
        assert_eq!(records[0].ticket.net_amount, 12.5);
        assert_eq!(
            records[0].ticket.extra.get("Units"),
            Some(&serde_json::json!(2.5))
        );
    }

    #[tokio::test]
    async fn should_concatenate_parquet_and_json_chunks_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_parquet_chunk(&dir.path().join("data_chunk_1.snappy.parquet"));
        std::fs::write(
            dir.path().join("data_chunk_0.json"),
            format!("[{}]", row("0|001", "2023-10-30", 7.0)),
        )
        .unwrap();

        let records = load_sales(&DatamartConfig::new(dir.path())).await.unwrap();

        let employees: Vec<&str> = records.iter().map(|r| r.key_employee.as_str()).collect();
        assert_eq!(employees, vec!["0|001", "1|343", "1|344"]);
    }

    #[tokio::test]
    async fn should_fail_when_parquet_chunk_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data_chunk_1.snappy.parquet"), "binary").unwrap();

        let result = load_sales(&DatamartConfig::new(dir.path())).await;

        assert!(matches!(result, Err(DatamartError::ParseError { .. })));
    }
}
