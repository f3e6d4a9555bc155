//! Pronoun framing detector.
//!
//! In-group/out-group framing measured through pronoun classes:
//! first-person plural (we) builds solidarity, third-person plural
//! (they) others the out-group, first-person singular (i) centers the
//! leader, second person (you) addresses the audience directly. A high
//! we/they ratio marks strong us-vs-them framing.

use rhetor_core::constants::DENSITY_WORDS;

use super::traits::{Metric, RhetoricDetector, SpeechText};

const WE_PRONOUNS: &[&str] = &["we", "us", "our", "ours", "ourselves"];
const I_PRONOUNS: &[&str] = &["i", "me", "my", "mine", "myself"];
const THEY_PRONOUNS: &[&str] = &["they", "them", "their", "theirs", "themselves"];
const YOU_PRONOUNS: &[&str] = &["you", "your", "yours", "yourself", "yourselves"];

const METRICS: &[&str] = &[
    "we_count",
    "i_count",
    "they_count",
    "you_count",
    "we_density",
    "they_density",
    "we_they_ratio",
    "we_i_ratio",
];

pub struct PronounDetector;

impl PronounDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PronounDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RhetoricDetector for PronounDetector {
    fn id(&self) -> &'static str {
        "pronouns"
    }

    fn metrics(&self) -> &'static [&'static str] {
        METRICS
    }

    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric> {
        let mut we = 0usize;
        let mut i = 0usize;
        let mut they = 0usize;
        let mut you = 0usize;

        for token in &speech.tokens {
            let token = token.as_str();
            if WE_PRONOUNS.contains(&token) {
                we += 1;
            } else if I_PRONOUNS.contains(&token) {
                i += 1;
            } else if THEY_PRONOUNS.contains(&token) {
                they += 1;
            } else if YOU_PRONOUNS.contains(&token) {
                you += 1;
            }
        }

        let word_count = speech.word_count().max(1) as f64;

        vec![
            Metric::new("we_count", we as f64),
            Metric::new("i_count", i as f64),
            Metric::new("they_count", they as f64),
            Metric::new("you_count", you as f64),
            Metric::new("we_density", we as f64 / word_count * DENSITY_WORDS),
            Metric::new("they_density", they as f64 / word_count * DENSITY_WORDS),
            Metric::new("we_they_ratio", we as f64 / they.max(1) as f64),
            Metric::new("we_i_ratio", we as f64 / i.max(1) as f64),
        ]
    }
}
