//! CSV datasets and report tables, backed by the `csv` crate.
//!
//! Quoted fields may hold commas, newlines and doubled quotes. A leading
//! UTF-8 BOM is ignored and blank lines are skipped.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Writer};
use indic_eval_domain::{Dataset, Sample};
use indic_eval_ports::{dataset::DatasetSource, report::Table};
use indic_eval_shared_kernel::{InfrastructureError, Result};

/// Columns a dataset file must carry; `label` is optional.
pub const REQUIRED_COLUMNS: [&str; 2] = ["text", "lang"];

fn parse_error(path: &Path, err: &csv::Error) -> InfrastructureError {
    let line = err.position().map_or(0, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
    InfrastructureError::CsvParse { path: path.to_path_buf(), line, details: err.to_string() }
}

fn encode_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::OutputError { message: format!("CSV encoding failed: {err}"), source: Some(Box::new(err)) }
}

/// Serializes `table` with `\n` line endings, quoting only where required.
pub fn write_string(table: &Table) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    for record in std::iter::once(&table.header).chain(&table.rows) {
        writer.write_record(record).map_err(encode_error)?;
    }
    let bytes = writer.into_inner().map_err(|e| InfrastructureError::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        InfrastructureError::OutputError { message: format!("CSV encoding failed: {e}"), source: Some(Box::new(e)) }
            .into()
    })
}

/// Loads `text,lang[,label]` datasets from a directory of CSV files.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    data_dir: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DatasetSource for CsvDatasetSource {
    /// Columns are matched by header name; extra columns are ignored and
    /// every row must have as many fields as the header.
    fn load(&self, name: &str) -> Result<Dataset> {
        let path = self.data_dir.join(name);
        let file = File::open(&path).map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })?;
        let mut reader = ReaderBuilder::new().from_reader(file);

        let headers = reader.headers().map_err(|e| parse_error(&path, &e))?;
        if let Some(column) = REQUIRED_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
            return Err(InfrastructureError::MissingColumn { path, column: (*column).to_string() }.into());
        }

        let dataset = reader
            .deserialize::<Sample>()
            .collect::<std::result::Result<Dataset, _>>()
            .map_err(|e| parse_error(&path, &e))?;
        log::debug!("loaded {} rows from {}", dataset.len(), path.display());
        Ok(dataset)
    }
}
