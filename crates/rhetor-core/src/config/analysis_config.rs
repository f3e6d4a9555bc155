//! Detector pipeline settings.

use serde::{Deserialize, Serialize};

/// Which detectors run and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Detector ids to run. Unknown ids are skipped with a warning.
    pub detectors: Vec<String>,

    /// Run detectors over speeches in parallel.
    pub parallel: bool,
}

impl AnalysisConfig {
    /// The full standard detector set, in registry order.
    pub fn standard_detectors() -> Vec<String> {
        ["anti_elite", "crisis", "certainty", "pronouns", "readability"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            detectors: Self::standard_detectors(),
            parallel: true,
        }
    }
}
