//! Report rendering settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Presentation orders accepted by `[report] order`.
pub const KNOWN_ORDERS: &[&str] = &["mean-desc", "key-asc", "count-desc"];

/// How summaries are rendered and where exports land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for score statistics.
    pub decimals: usize,

    /// Default presentation order for flattened summary tables. Year
    /// tables always render chronologically unless overridden.
    pub order: String,

    /// Directory receiving report files and exports.
    pub out_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimals: 3,
            order: "mean-desc".to_string(),
            out_dir: PathBuf::from("data/results"),
        }
    }
}
