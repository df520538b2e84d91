use std::path::{Path, PathBuf};

use indic_eval_ports::report::{ReportSink, Table};
use indic_eval_shared_kernel::{InfrastructureError, Result};

use super::FileWriter;
use crate::delimited;

/// Writes report artifacts into a single output directory.
#[derive(Debug, Clone)]
pub struct FsReportSink {
    out_dir: PathBuf,
}

impl FsReportSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.resolve(name);
        FileWriter::atomic_write(&path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}

impl ReportSink for FsReportSink {
    fn resolve(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    fn write_table(&self, name: &str, table: &Table) -> Result<PathBuf> {
        self.write(name, delimited::write_string(table)?.as_bytes())
    }

    /// Pretty-printed with two-space indentation; non-ASCII text is kept as is.
    fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<PathBuf> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        self.write(name, json.as_bytes())
    }
}
