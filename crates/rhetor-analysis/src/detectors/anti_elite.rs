//! Anti-establishment rhetoric detector.
//!
//! Four weighted term groups: elite/establishment references, system
//! criticism, populist positive framing, and negative framing of "the
//! people" as forgotten or betrayed. Counts and weighted scores combine
//! into a net populist score and a density per 1000 words.

use rhetor_core::constants::DENSITY_WORDS;

use super::lexicon::{TermGroup, WeightedLexicon};
use super::traits::{Metric, RhetoricDetector, SpeechText};

const ANTI_ELITE_TERMS: TermGroup = &[
    ("establishment", -2.0),
    ("elite", -2.5),
    ("elites", -2.5),
    ("ruling class", -2.5),
    ("political class", -2.0),
    ("political elite", -2.5),
    ("westminster", -1.5),
    ("westminster bubble", -2.0),
    ("brussels", -2.0),
    ("brussels bureaucrats", -2.5),
    ("eurocrats", -2.0),
    ("washington", -1.5),
    ("washington insiders", -2.0),
    ("beltway", -1.5),
    ("deep state", -2.5),
    ("career politicians", -2.0),
    ("career politician", -2.0),
    ("professional politicians", -2.0),
    ("out of touch", -2.0),
    ("disconnected", -1.5),
    ("ivory tower", -2.0),
];

const SYSTEM_CRITICISM: TermGroup = &[
    ("rigged", -2.5),
    ("rigged system", -3.0),
    ("corrupt", -3.0),
    ("corrupted", -2.5),
    ("corruption", -2.5),
    ("swamp", -2.0),
    ("drain the swamp", -2.0),
    ("broken system", -2.5),
    ("broken", -1.5),
    ("failed", -2.0),
    ("failing", -1.5),
    ("betrayed", -3.0),
    ("betrayal", -2.5),
    ("sold out", -2.5),
    ("crooked", -2.5),
];

const POPULIST_POSITIVE: TermGroup = &[
    ("ordinary people", 2.0),
    ("ordinary", 1.0),
    ("working people", 1.5),
    ("working families", 1.5),
    ("hardworking families", 2.0),
    ("hardworking", 1.5),
    ("the people", 1.5),
    ("take back control", 2.5),
    ("take control", 2.0),
    ("sovereignty", 2.0),
    ("our country back", 2.0),
    ("common sense", 1.5),
    ("real people", 1.5),
];

const PEOPLE_NEGATIVE: TermGroup = &[
    ("forgotten", -2.0),
    ("forgotten people", -2.5),
    ("left behind", -2.0),
    ("ignored", -1.5),
    ("neglected", -1.5),
];

const GROUP_ANTI_ELITE: usize = 0;
const GROUP_SYSTEM: usize = 1;
const GROUP_POSITIVE: usize = 2;
const GROUP_PEOPLE_NEG: usize = 3;

const METRICS: &[&str] = &[
    "anti_elite_count",
    "anti_elite_score",
    "net_populist_score",
    "anti_elite_density",
];

pub struct AntiEliteDetector {
    lexicon: WeightedLexicon,
}

impl AntiEliteDetector {
    pub fn new() -> Self {
        Self {
            lexicon: WeightedLexicon::new(&[
                ANTI_ELITE_TERMS,
                SYSTEM_CRITICISM,
                POPULIST_POSITIVE,
                PEOPLE_NEGATIVE,
            ]),
        }
    }
}

impl Default for AntiEliteDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RhetoricDetector for AntiEliteDetector {
    fn id(&self) -> &'static str {
        "anti_elite"
    }

    fn metrics(&self) -> &'static [&'static str] {
        METRICS
    }

    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric> {
        let hits = self.lexicon.scan(&speech.lowered);
        let word_count = speech.word_count();

        // The positive-framing group is excluded from the anti-elite
        // totals; it only contributes to the net score.
        let anti_count = hits.count(GROUP_ANTI_ELITE)
            + hits.count(GROUP_SYSTEM)
            + hits.count(GROUP_PEOPLE_NEG);
        let anti_score =
            hits.score(GROUP_ANTI_ELITE) + hits.score(GROUP_SYSTEM) + hits.score(GROUP_PEOPLE_NEG);
        let net_score = anti_score + hits.score(GROUP_POSITIVE);

        let density = if word_count > 0 {
            anti_count as f64 / word_count as f64 * DENSITY_WORDS
        } else {
            0.0
        };

        vec![
            Metric::new("anti_elite_count", anti_count as f64),
            Metric::new("anti_elite_score", anti_score),
            Metric::new("net_populist_score", net_score),
            Metric::new("anti_elite_density", density),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Metric> {
        AntiEliteDetector::new().detect(&SpeechText::prepare(text))
    }

    fn value(metrics: &[Metric], name: &str) -> f64 {
        metrics.iter().find(|m| m.name == name).unwrap().value
    }

    #[test]
    fn test_counts_negative_and_positive_framing_separately() {
        let metrics = run("The corrupt establishment betrayed ordinary people.");
        // corrupt (-3.0) + establishment (-2.0) + betrayed (-3.0)
        assert_eq!(value(&metrics, "anti_elite_count"), 3.0);
        assert_eq!(value(&metrics, "anti_elite_score"), -8.0);
        // "ordinary people" (+2.0) shifts only the net score.
        assert_eq!(value(&metrics, "net_populist_score"), -6.0);
    }

    #[test]
    fn test_phrase_beats_component_words() {
        let metrics = run("We must drain the swamp.");
        // One phrase hit, not an extra hit for bare "swamp".
        assert_eq!(value(&metrics, "anti_elite_count"), 1.0);
        assert_eq!(value(&metrics, "anti_elite_score"), -2.0);
    }

    #[test]
    fn test_density_is_per_thousand_words() {
        // 10 words, one anti-elite hit -> 100 per 1000 words.
        let metrics = run("the elite have one two three four five six seven");
        assert!((value(&metrics, "anti_elite_density") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        let metrics = run("Good morning everyone, thank you for coming.");
        assert_eq!(value(&metrics, "anti_elite_count"), 0.0);
        assert_eq!(value(&metrics, "net_populist_score"), 0.0);
    }
}
