//! Presentation ordering for flattened summary maps.
//!
//! Ordering is a rendering concern, not a correctness constraint: the
//! aggregation itself returns an unordered map and callers choose how
//! to lay it out (speaker tables by mean, year tables chronologically).

use std::cmp::Ordering;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use super::{GroupKey, GroupSummary};

/// How a summary map is ordered when flattened for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrder {
    /// Highest mean sentiment first.
    MeanDescending,
    /// Natural key order: chronological for years, alphabetical for
    /// speakers.
    KeyAscending,
    /// Largest group first.
    CountDescending,
}

impl SummaryOrder {
    pub fn name(&self) -> &'static str {
        match self {
            SummaryOrder::MeanDescending => "mean-desc",
            SummaryOrder::KeyAscending => "key-asc",
            SummaryOrder::CountDescending => "count-desc",
        }
    }
}

impl FromStr for SummaryOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mean-desc" => Ok(SummaryOrder::MeanDescending),
            "key-asc" => Ok(SummaryOrder::KeyAscending),
            "count-desc" => Ok(SummaryOrder::CountDescending),
            other => Err(format!("unknown summary order '{other}'")),
        }
    }
}

/// Flatten a summary map into the requested presentation order.
///
/// Ties (and NaN means, which cannot order) fall back to key order so
/// the result is deterministic.
pub fn sorted_entries(
    map: FxHashMap<GroupKey, GroupSummary>,
    order: SummaryOrder,
) -> Vec<(GroupKey, GroupSummary)> {
    let mut entries: Vec<(GroupKey, GroupSummary)> = map.into_iter().collect();
    entries.sort_by(|a, b| match order {
        SummaryOrder::KeyAscending => a.0.cmp(&b.0),
        SummaryOrder::MeanDescending => b
            .1
            .mean
            .partial_cmp(&a.1.mean)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0)),
        SummaryOrder::CountDescending => b.1.n.cmp(&a.1.n).then_with(|| a.0.cmp(&b.0)),
    });
    entries
}
