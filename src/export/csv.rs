// src/export/csv.rs
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::ResultSink;
use crate::models::{CompanyRecord, Result};

pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for CsvSink {
    fn write(&self, records: &[CompanyRecord]) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(&self.path)?;

        writeln!(file, "Company Name,Website URL,Contact Info")?;

        // Fields are quoted as-is; embedded quotes are not escaped.
        let rows = records
            .iter()
            .map(|r| format!("\"{}\",\"{}\",\"{}\"", r.company_name, r.website, r.contact))
            .collect::<Vec<_>>()
            .join("\n");
        file.write_all(rows.as_bytes())?;

        info!("Output saved to {}", self.path.display());
        Ok(())
    }
}
