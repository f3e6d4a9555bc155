//! Feature engine: runs the detector registry over a labeled corpus.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::info;

use rhetor_core::types::{Category, SpeechDocument, SpeechMeta};

use crate::aggregate::GroupSummary;
use crate::detectors::{DetectorRegistry, SpeechText};

/// Per-speech rhetorical metrics.
#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub meta: SpeechMeta,
    pub word_count: usize,
    pub values: FxHashMap<&'static str, f64>,
}

/// The full per-speech feature matrix with a stable column order.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub columns: Vec<&'static str>,
    pub rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    /// Summarize one metric by category, reusing the aggregation
    /// statistics. Categories with no rows are omitted.
    pub fn category_summary(&self, metric: &str) -> Vec<(Category, GroupSummary)> {
        Category::all()
            .iter()
            .filter_map(|category| {
                let scores: Vec<f64> = self
                    .rows
                    .iter()
                    .filter(|row| row.meta.category == *category)
                    .filter_map(|row| row.values.get(metric).copied())
                    .collect();
                GroupSummary::from_scores(&scores).map(|summary| (*category, summary))
            })
            .collect()
    }
}

/// Runs every registered detector over every speech.
pub struct FeatureEngine {
    registry: DetectorRegistry,
    parallel: bool,
}

impl FeatureEngine {
    pub fn new(registry: DetectorRegistry) -> Self {
        Self {
            registry,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, documents: &[SpeechDocument]) -> FeatureMatrix {
        let analyze = |document: &SpeechDocument| -> FeatureRow {
            let speech = SpeechText::prepare(&document.text);
            let mut values = FxHashMap::default();
            for detector in self.registry.detectors() {
                for metric in detector.detect(&speech) {
                    values.insert(metric.name, metric.value);
                }
            }
            FeatureRow {
                meta: document.meta.clone(),
                word_count: speech.word_count(),
                values,
            }
        };

        let rows: Vec<FeatureRow> = if self.parallel {
            documents.par_iter().map(analyze).collect()
        } else {
            documents.iter().map(analyze).collect()
        };

        info!(
            speeches = rows.len(),
            detectors = self.registry.len(),
            "feature extraction complete"
        );

        FeatureMatrix {
            columns: self.registry.metric_names(),
            rows,
        }
    }
}
