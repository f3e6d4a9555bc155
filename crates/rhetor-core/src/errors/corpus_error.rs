//! Ingestion errors.
//!
//! These are faults that stop a run: missing files, unreadable CSV.
//! Malformed individual rows are never errors; they are excluded and
//! counted per the rejection policy (see `types::RecordViolation`).

use super::error_code::{self, RhetorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Metadata file not found: {path}")]
    MetadataNotFound { path: String },

    #[error("Scores file not found: {path}")]
    ScoresNotFound { path: String },

    #[error("Corpus directory not found: {path}")]
    CorpusDirNotFound { path: String },

    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    #[error("CSV read error in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RhetorErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
