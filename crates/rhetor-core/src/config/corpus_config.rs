//! Corpus location and ingestion settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the corpus lives and how its files are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory of preprocessed transcript `.txt` files.
    pub corpus_dir: PathBuf,

    /// Metadata CSV tracking every speech (filename, speaker, party,
    /// country, date, category).
    pub metadata_file: PathBuf,

    /// Per-speech scored-results CSV exported by the upstream sentiment
    /// tool.
    pub scores_file: PathBuf,

    /// Column of `scores_file` holding the per-speech sentiment score.
    /// The sentence-level mean is the primary metric; the whole-text
    /// compound saturates on long speeches.
    pub score_column: String,

    /// Suffix appended to raw filename stems by the preprocessing step.
    pub cleaned_suffix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("data/processed"),
            metadata_file: PathBuf::from("data/docs/metadata.csv"),
            scores_file: PathBuf::from("data/results/sentiment_results.csv"),
            score_column: "sentence_mean".to_string(),
            cleaned_suffix: "_cleaned".to_string(),
        }
    }
}
