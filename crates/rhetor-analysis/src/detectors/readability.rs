//! Readability detector.
//!
//! Flesch Reading Ease and Flesch-Kincaid grade from word, sentence,
//! and syllable counts, plus average sentence length and the share of
//! polysyllabic words. Syllables come from a vowel-group heuristic:
//! count maximal vowel runs, drop a silent trailing "e", floor at one.

use super::traits::{Metric, RhetoricDetector, SpeechText};

const METRICS: &[&str] = &[
    "flesch_reading_ease",
    "flesch_kincaid_grade",
    "avg_sentence_length",
    "polysyllabic_pct",
];

pub struct ReadabilityDetector;

impl ReadabilityDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadabilityDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate syllables in a lowercase word.
pub fn syllables(word: &str) -> usize {
    let bytes = word.as_bytes();
    let is_vowel = |b: u8| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y');

    let mut groups = 0usize;
    let mut in_group = false;
    for &b in bytes {
        if is_vowel(b) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    // Silent trailing "e" ("time", "vote") unless it is the only vowel
    // group or part of an "-le" ending ("people", "simple").
    if groups > 1 && bytes.last() == Some(&b'e') {
        let penultimate = bytes.len().checked_sub(2).map(|i| bytes[i]);
        let le_ending = penultimate == Some(b'l');
        let vowel_before_e = penultimate.map(is_vowel).unwrap_or(false);
        if !le_ending && !vowel_before_e {
            groups -= 1;
        }
    }

    groups.max(1)
}

impl RhetoricDetector for ReadabilityDetector {
    fn id(&self) -> &'static str {
        "readability"
    }

    fn metrics(&self) -> &'static [&'static str] {
        METRICS
    }

    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric> {
        let words = speech.word_count();
        let sents = speech.sentences.len();
        if words == 0 || sents == 0 {
            return METRICS
                .iter()
                .copied()
                .map(|name| Metric::new(name, 0.0))
                .collect();
        }

        let mut syllable_total = 0usize;
        let mut polysyllabic = 0usize;
        for token in &speech.tokens {
            let count = syllables(token);
            syllable_total += count;
            if count >= 3 {
                polysyllabic += 1;
            }
        }

        let words_f = words as f64;
        let words_per_sentence = words_f / sents as f64;
        let syllables_per_word = syllable_total as f64 / words_f;

        let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let fk_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

        vec![
            Metric::new("flesch_reading_ease", flesch),
            Metric::new("flesch_kincaid_grade", fk_grade),
            Metric::new("avg_sentence_length", words_per_sentence),
            Metric::new("polysyllabic_pct", polysyllabic as f64 / words_f * 100.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Metric> {
        ReadabilityDetector::new().detect(&SpeechText::prepare(text))
    }

    fn value(metrics: &[Metric], name: &str) -> f64 {
        metrics.iter().find(|m| m.name == name).unwrap().value
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("people"), 2);
        assert_eq!(syllables("time"), 1);
        assert_eq!(syllables("free"), 1);
        assert_eq!(syllables("country"), 2);
        assert_eq!(syllables("immigration"), 4);
        assert_eq!(syllables("x"), 1);
    }

    #[test]
    fn test_short_simple_text_reads_easy() {
        let metrics = run("We will win. They will lose. The plan is good.");
        // Monosyllabic four-word sentences sit near the top of the scale.
        assert!(value(&metrics, "flesch_reading_ease") > 90.0);
        assert!(value(&metrics, "flesch_kincaid_grade") < 3.0);
    }

    #[test]
    fn test_avg_sentence_length() {
        let metrics = run("One two three. Four five six seven.");
        assert!((value(&metrics, "avg_sentence_length") - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_polysyllabic_share() {
        let metrics = run("The bureaucratic establishment persists.");
        // bureaucratic, establishment >= 3 syllables; "persists" has two.
        assert!((value(&metrics, "polysyllabic_pct") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_is_all_zeroes() {
        let metrics = run("");
        for metric in metrics {
            assert_eq!(metric.value, 0.0);
        }
    }
}
