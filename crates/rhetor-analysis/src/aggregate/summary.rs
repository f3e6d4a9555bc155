//! Descriptive statistics for one group of sentiment scores.

use serde::Serialize;
use statrs::statistics::{Data, Median};

/// Count, central tendency, spread, and extrema of a group's scores.
///
/// Standard deviation is the sample definition (n−1 denominator); a
/// group of size 1 reports 0.0 rather than an undefined value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl GroupSummary {
    /// Summarize a non-empty slice of scores. Returns `None` for an
    /// empty slice: zero-record groups are omitted from output, never
    /// represented with NaN statistics.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let n = scores.len();
        let count = n as f64;
        let mean = scores.iter().sum::<f64>() / count;

        let stddev = if n == 1 {
            0.0
        } else {
            let variance =
                scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (count - 1.0);
            if variance.is_finite() && variance >= 0.0 {
                variance.sqrt()
            } else {
                0.0
            }
        };

        let median = Data::new(scores.to_vec()).median();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for score in scores {
            min = min.min(*score);
            max = max.max(*score);
        }

        Some(GroupSummary {
            n,
            mean,
            median,
            stddev,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_yields_none() {
        assert!(GroupSummary::from_scores(&[]).is_none());
    }

    #[test]
    fn test_singleton_group_collapses() {
        let summary = GroupSummary::from_scores(&[0.42]).unwrap();
        assert_eq!(summary.n, 1);
        assert_eq!(summary.mean, 0.42);
        assert_eq!(summary.median, 0.42);
        assert_eq!(summary.min, 0.42);
        assert_eq!(summary.max, 0.42);
        assert_eq!(summary.stddev, 0.0);
    }

    #[test]
    fn test_even_count_median_averages_midpoints() {
        let summary = GroupSummary::from_scores(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert!((summary.median - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_sample_stddev() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] about mean 5 is 32/7 with
        // the n-1 denominator.
        let summary = GroupSummary::from_scores(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((summary.stddev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_input() {
        let summary = GroupSummary::from_scores(&[0.9, -0.5, 0.1]).unwrap();
        assert_eq!(summary.min, -0.5);
        assert_eq!(summary.max, 0.9);
        assert!((summary.median - 0.1).abs() < 1e-12);
    }
}
