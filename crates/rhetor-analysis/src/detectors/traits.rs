//! Detector trait and metric primitives.

use crate::text::{sentences, tokenize};

/// A single named measurement emitted by a detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
}

impl Metric {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

/// Prepared per-speech text, computed once and shared by all detectors.
pub struct SpeechText<'a> {
    /// The raw transcript.
    pub raw: &'a str,
    /// Lowercased transcript, for phrase scanning.
    pub lowered: String,
    /// Punctuation-stripped lowercase tokens.
    pub tokens: Vec<String>,
    /// Sentence fragments split on terminators.
    pub sentences: Vec<&'a str>,
}

impl<'a> SpeechText<'a> {
    pub fn prepare(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
            tokens: tokenize(raw),
            sentences: sentences(raw),
        }
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Trait that every rhetorical detector must implement.
pub trait RhetoricDetector: Send + Sync {
    /// Unique identifier for this detector.
    fn id(&self) -> &'static str;

    /// Names of the metrics this detector emits, in stable output order.
    fn metrics(&self) -> &'static [&'static str];

    /// Run detection over one prepared speech.
    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric>;
}
