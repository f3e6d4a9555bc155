//! Analysis engine: grouped descriptive statistics over scored speech
//! records, and lexicon/heuristic detectors for rhetorical features.
//!
//! The aggregation side is a pure fold: records in, per-group summary
//! statistics out. The detector side runs a registry of
//! `RhetoricDetector`s over transcript texts and produces a per-speech
//! feature matrix.

pub mod aggregate;
pub mod detectors;
pub mod engine;
pub mod text;

pub use aggregate::{Aggregator, GroupBy, GroupKey, GroupSummary, SummaryOrder};
pub use detectors::{DetectorRegistry, Metric, RhetoricDetector, SpeechText};
pub use engine::{FeatureEngine, FeatureMatrix, FeatureRow};
