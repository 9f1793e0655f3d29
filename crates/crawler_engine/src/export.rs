use std::path::{Path, PathBuf};

use crawler_core::{encode_csv, Record};

use crate::persist::{AtomicFileWriter, PersistError};

/// Fixed name of the per-run export file.
pub const EXPORT_FILENAME: &str = "recipe_results.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub bytes_written: u64,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Encodes the finished collection and delivers it to
/// `{output_dir}/recipe_results.csv` in one atomic write. Called once per
/// run, after the whole range has settled; there is no partial output.
pub fn export_csv(output_dir: &Path, records: &[Record]) -> Result<ExportSummary, ExportError> {
    let csv = encode_csv(records);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let output_path = writer.write(EXPORT_FILENAME, csv.as_bytes())?;
    Ok(ExportSummary {
        row_count: records.len(),
        bytes_written: csv.len() as u64,
        output_path,
    })
}
