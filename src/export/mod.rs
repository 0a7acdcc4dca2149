pub mod csv;

pub use csv::CsvSink;

use crate::models::{CompanyRecord, Result};

/// Persists a finished result set. Failing here is fatal for the run,
/// unlike every per-candidate failure upstream.
pub trait ResultSink: Send + Sync {
    fn write(&self, records: &[CompanyRecord]) -> Result<()>;
}
