//! Report rendering and export errors.

use super::error_code::{self, RhetorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("Serialization error: {message}")]
    Serialize { message: String },
}

impl RhetorErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
