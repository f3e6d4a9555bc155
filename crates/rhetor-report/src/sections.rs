//! Flattened, ordered summary data handed to the formatters.

use rhetor_analysis::aggregate::GroupSummary;

/// One rendered grouping: a heading plus ordered `(key, summary)` rows.
/// Keys are already stringified so the formatters stay agnostic of the
/// grouping dimension.
#[derive(Debug, Clone)]
pub struct SummarySection {
    pub heading: String,
    pub entries: Vec<(String, GroupSummary)>,
}

impl SummarySection {
    pub fn new(heading: impl Into<String>, entries: Vec<(String, GroupSummary)>) -> Self {
        Self {
            heading: heading.into(),
            entries,
        }
    }
}

/// Signed fixed-point formatting for score statistics, matching the
/// `+0.171` style of the written report.
pub fn fmt_signed(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}")
}

/// Unsigned fixed-point formatting for spread statistics.
pub fn fmt_plain(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
