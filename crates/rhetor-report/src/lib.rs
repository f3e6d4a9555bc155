//! Report rendering.
//!
//! Summary maps come in flattened and ordered (`SummarySection`); the
//! formatters only lay them out. Markdown and plain text target the
//! written report, JSON and CSV downstream analysis.

pub mod csv_export;
pub mod json;
pub mod markdown;
pub mod sections;
pub mod text;

pub use csv_export::{write_feature_matrix, write_summary_csv};
pub use json::JsonReport;
pub use markdown::MarkdownReport;
pub use sections::SummarySection;
pub use text::TextReport;
