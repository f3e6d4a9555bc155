//! Top-level pipeline error aggregating the per-domain enums.

use super::config_error::ConfigError;
use super::corpus_error::CorpusError;
use super::error_code::RhetorErrorCode;
use super::report_error::ReportError;

/// Error type returned by end-to-end pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("{0}")]
    Report(#[from] ReportError),
}

impl RhetorErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            PipelineError::Config(e) => e.error_code(),
            PipelineError::Corpus(e) => e.error_code(),
            PipelineError::Report(e) => e.error_code(),
        }
    }
}
