//! Per-domain error enums with stable error codes.

pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod pipeline_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::RhetorErrorCode;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
