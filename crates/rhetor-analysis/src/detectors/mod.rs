//! Rhetorical feature detectors.
//!
//! Each detector implements the `RhetoricDetector` trait and is
//! registered in the `DetectorRegistry`. The standard set covers the
//! rhetorical markers of populist framing: anti-elite language, crisis
//! framing, certainty vs hedging, pronoun in-group/out-group framing,
//! and readability.

pub mod anti_elite;
pub mod certainty;
pub mod crisis;
pub mod lexicon;
pub mod pronouns;
pub mod readability;
pub mod registry;
pub mod traits;

pub use registry::DetectorRegistry;
pub use traits::{Metric, RhetoricDetector, SpeechText};
