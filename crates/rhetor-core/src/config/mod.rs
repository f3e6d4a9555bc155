//! Layered TOML configuration.

pub mod analysis_config;
pub mod corpus_config;
pub mod report_config;
pub mod rhetor_config;

pub use analysis_config::AnalysisConfig;
pub use corpus_config::CorpusConfig;
pub use report_config::ReportConfig;
pub use rhetor_config::{CliOverrides, RhetorConfig};
