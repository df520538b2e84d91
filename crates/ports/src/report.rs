// crates/ports/src/report.rs
use std::path::PathBuf;

use indic_eval_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Header plus string rows, ready for a delimited writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Port for persisting report artifacts inside an output directory.
pub trait ReportSink: Send + Sync {
    /// Location an artifact called `name` is (or would be) written to.
    fn resolve(&self, name: &str) -> PathBuf;
    fn write_table(&self, name: &str, table: &Table) -> Result<PathBuf>;
    fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<PathBuf>;
}
