//! Detector registry.

use tracing::warn;

use super::anti_elite::AntiEliteDetector;
use super::certainty::CertaintyDetector;
use super::crisis::CrisisDetector;
use super::pronouns::PronounDetector;
use super::readability::ReadabilityDetector;
use super::traits::RhetoricDetector;

/// Ordered collection of detectors. Registration order fixes the
/// metric column order in exports.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn RhetoricDetector>>,
}

impl DetectorRegistry {
    /// The full standard detector set.
    pub fn standard() -> Self {
        Self {
            detectors: vec![
                Box::new(AntiEliteDetector::new()),
                Box::new(CrisisDetector::new()),
                Box::new(CertaintyDetector::new()),
                Box::new(PronounDetector::new()),
                Box::new(ReadabilityDetector::new()),
            ],
        }
    }

    /// The standard set filtered to the given ids, keeping registry
    /// order. Unknown ids are skipped with a warning.
    pub fn with_enabled(ids: &[String]) -> Self {
        let standard = Self::standard();
        for id in ids {
            if !standard.detectors.iter().any(|d| d.id() == id) {
                warn!(id = %id, "unknown detector id, skipping");
            }
        }
        Self {
            detectors: standard
                .detectors
                .into_iter()
                .filter(|d| ids.iter().any(|id| id == d.id()))
                .collect(),
        }
    }

    pub fn detectors(&self) -> &[Box<dyn RhetoricDetector>] {
        &self.detectors
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// All emitted metric names, in registry order.
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.detectors
            .iter()
            .flat_map(|d| d.metrics().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = DetectorRegistry::standard();
        let ids: Vec<&str> = registry.detectors().iter().map(|d| d.id()).collect();
        assert_eq!(
            ids,
            vec!["anti_elite", "crisis", "certainty", "pronouns", "readability"]
        );
    }

    #[test]
    fn test_metric_names_are_unique() {
        let registry = DetectorRegistry::standard();
        let names = registry.metric_names();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_with_enabled_filters_and_keeps_order() {
        let registry =
            DetectorRegistry::with_enabled(&["pronouns".to_string(), "crisis".to_string()]);
        let ids: Vec<&str> = registry.detectors().iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["crisis", "pronouns"]);
    }

    #[test]
    fn test_with_enabled_skips_unknown_ids() {
        let registry = DetectorRegistry::with_enabled(&["sarcasm".to_string()]);
        assert!(registry.is_empty());
    }
}
