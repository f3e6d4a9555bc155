//! Certainty and hedging detector.
//!
//! Epistemic stance: absolute markers, modal verbs of certainty,
//! emphatic adverbs, and fixed certainty phrases carry positive
//! weights; hedging markers carry negative weights. The net score
//! subtracts hedging from certainty.

use rhetor_core::constants::DENSITY_WORDS;

use super::lexicon::{TermGroup, WeightedLexicon};
use super::traits::{Metric, RhetoricDetector, SpeechText};

const CERTAINTY_MARKERS: TermGroup = &[
    ("certain", 3.0),
    ("certainly", 3.0),
    ("sure", 2.5),
    ("surely", 2.5),
    ("definite", 3.0),
    ("definitely", 3.0),
    ("absolute", 3.5),
    ("absolutely", 3.5),
    ("undoubtedly", 3.5),
    ("without doubt", 3.5),
    ("no doubt", 3.0),
    ("beyond doubt", 3.5),
    ("unquestionably", 3.5),
    ("indisputable", 3.5),
    ("indisputably", 3.5),
    ("inevitable", 3.0),
    ("inevitably", 3.0),
    ("guaranteed", 3.0),
    ("guarantee", 2.5),
];

const CERTAINTY_MODALS: TermGroup = &[
    ("will", 2.0),
    ("shall", 2.5),
    ("must", 2.5),
    ("have to", 2.0),
    ("need to", 2.0),
    ("going to", 1.5),
];

const EMPHATIC_CERTAINTY: TermGroup = &[
    ("clearly", 2.5),
    ("obviously", 3.0),
    ("evidently", 2.5),
    ("plainly", 2.5),
    ("manifestly", 3.0),
    ("patently", 3.0),
    ("undeniably", 3.5),
    ("incontrovertibly", 3.5),
    ("unequivocally", 3.5),
    ("categorically", 3.0),
    ("absolutely certain", 4.0),
    ("perfectly clear", 3.5),
    ("crystal clear", 3.5),
    ("without question", 3.5),
];

const CERTAINTY_PHRASES: TermGroup = &[
    ("make no mistake", 3.5),
    ("let me be clear", 3.0),
    ("the fact is", 3.0),
    ("the truth is", 3.0),
    ("there is no question", 3.5),
    ("rest assured", 3.0),
    ("mark my words", 3.5),
    ("you can be sure", 3.0),
    ("i guarantee", 3.5),
    ("i promise", 3.0),
    ("we will", 2.5),
    ("we must", 2.5),
    ("we shall", 3.0),
];

const HEDGING_MARKERS: TermGroup = &[
    ("maybe", -2.0),
    ("perhaps", -2.0),
    ("possibly", -2.0),
    ("probably", -1.5),
    ("likely", -1.0),
    ("unlikely", -1.0),
    ("might", -2.0),
    ("could", -1.5),
    ("may", -1.5),
    ("can", -1.0),
    ("seem", -1.5),
    ("seems", -1.5),
    ("appear", -1.5),
    ("appears", -1.5),
    ("suggest", -1.5),
    ("suggests", -1.5),
    ("indicate", -1.0),
    ("indicates", -1.0),
    ("tend to", -1.5),
    ("tends to", -1.5),
    ("somewhat", -1.5),
    ("rather", -1.0),
    ("fairly", -1.0),
    ("quite", -1.0),
    ("relatively", -1.5),
    ("arguably", -2.0),
    ("conceivably", -2.0),
    ("potentially", -1.5),
    ("presumably", -1.5),
    ("supposedly", -2.0),
    ("allegedly", -2.5),
];

const GROUP_MARKERS: usize = 0;
const GROUP_MODALS: usize = 1;
const GROUP_EMPHATIC: usize = 2;
const GROUP_PHRASES: usize = 3;
const GROUP_HEDGING: usize = 4;

const METRICS: &[&str] = &[
    "certainty_count",
    "certainty_density",
    "hedging_count",
    "hedging_density",
    "certainty_hedging_ratio",
    "net_certainty_score",
];

pub struct CertaintyDetector {
    lexicon: WeightedLexicon,
}

impl CertaintyDetector {
    pub fn new() -> Self {
        Self {
            lexicon: WeightedLexicon::new(&[
                CERTAINTY_MARKERS,
                CERTAINTY_MODALS,
                EMPHATIC_CERTAINTY,
                CERTAINTY_PHRASES,
                HEDGING_MARKERS,
            ]),
        }
    }
}

impl Default for CertaintyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RhetoricDetector for CertaintyDetector {
    fn id(&self) -> &'static str {
        "certainty"
    }

    fn metrics(&self) -> &'static [&'static str] {
        METRICS
    }

    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric> {
        let hits = self.lexicon.scan(&speech.lowered);
        let word_count = speech.word_count().max(1) as f64;

        let certainty_count = hits.count(GROUP_MARKERS)
            + hits.count(GROUP_MODALS)
            + hits.count(GROUP_EMPHATIC)
            + hits.count(GROUP_PHRASES);
        let certainty_score = hits.score(GROUP_MARKERS)
            + hits.score(GROUP_MODALS)
            + hits.score(GROUP_EMPHATIC)
            + hits.score(GROUP_PHRASES);
        let hedging_count = hits.count(GROUP_HEDGING);
        // Hedging weights are negative, so addition subtracts.
        let net_score = certainty_score + hits.score(GROUP_HEDGING);

        vec![
            Metric::new("certainty_count", certainty_count as f64),
            Metric::new(
                "certainty_density",
                certainty_count as f64 / word_count * DENSITY_WORDS,
            ),
            Metric::new("hedging_count", hedging_count as f64),
            Metric::new(
                "hedging_density",
                hedging_count as f64 / word_count * DENSITY_WORDS,
            ),
            Metric::new(
                "certainty_hedging_ratio",
                certainty_count as f64 / hedging_count.max(1) as f64,
            ),
            Metric::new("net_certainty_score", net_score),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Metric> {
        CertaintyDetector::new().detect(&SpeechText::prepare(text))
    }

    fn value(metrics: &[Metric], name: &str) -> f64 {
        metrics.iter().find(|m| m.name == name).unwrap().value
    }

    #[test]
    fn test_phrase_subsumes_modal() {
        let metrics = run("We will rebuild this country.");
        // "we will" (2.5) wins over bare "will" (2.0).
        assert_eq!(value(&metrics, "certainty_count"), 1.0);
        assert!((value(&metrics, "net_certainty_score") - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_hedging_offsets_certainty() {
        let metrics = run("It will succeed, though perhaps slowly.");
        // will (+2.0), perhaps (-2.0)
        assert_eq!(value(&metrics, "certainty_count"), 1.0);
        assert_eq!(value(&metrics, "hedging_count"), 1.0);
        assert!((value(&metrics, "net_certainty_score") - 0.0).abs() < 1e-12);
        assert!((value(&metrics, "certainty_hedging_ratio") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_guards_division_by_zero() {
        let metrics = run("Make no mistake, we must act.");
        assert_eq!(value(&metrics, "hedging_count"), 0.0);
        // Ratio divides by max(hedging, 1).
        assert_eq!(
            value(&metrics, "certainty_hedging_ratio"),
            value(&metrics, "certainty_count")
        );
    }

    #[test]
    fn test_short_hedges_respect_boundaries() {
        // "can" must not fire inside "canvas" or "American".
        let metrics = run("The American canvas painting.");
        assert_eq!(value(&metrics, "hedging_count"), 0.0);
    }
}
