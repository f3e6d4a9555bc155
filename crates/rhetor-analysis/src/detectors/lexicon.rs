//! Weighted phrase lexicons with leftmost-longest scanning.
//!
//! Terms are grouped (e.g. "system criticism" vs "populist positive")
//! and carry signed weights. Scanning is non-overlapping and
//! longest-match-wins, so "rigged system" counts once as the phrase,
//! not again as "rigged". Matches must sit on word boundaries; "now"
//! never fires inside "known".

use aho_corasick::{AhoCorasick, MatchKind};

/// A group of weighted terms, `(term, weight)`. Terms must be lowercase.
pub type TermGroup = &'static [(&'static str, f64)];

/// Per-group hit counts and weighted scores from one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconHits {
    pub counts: Vec<usize>,
    pub scores: Vec<f64>,
}

impl LexiconHits {
    pub fn count(&self, group: usize) -> usize {
        self.counts[group]
    }

    pub fn score(&self, group: usize) -> f64 {
        self.scores[group]
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Compiled multi-group weighted lexicon.
pub struct WeightedLexicon {
    matcher: AhoCorasick,
    weights: Vec<f64>,
    group_of: Vec<usize>,
    group_count: usize,
}

impl WeightedLexicon {
    pub fn new(groups: &[TermGroup]) -> Self {
        let mut patterns: Vec<&'static str> = Vec::new();
        let mut weights = Vec::new();
        let mut group_of = Vec::new();
        for (group_idx, terms) in groups.iter().enumerate() {
            for (term, weight) in terms.iter() {
                patterns.push(term);
                weights.push(*weight);
                group_of.push(group_idx);
            }
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("lexicon terms build");

        Self {
            matcher,
            weights,
            group_of,
            group_count: groups.len(),
        }
    }

    /// Scan lowercased text, tallying hits per group.
    pub fn scan(&self, lowered: &str) -> LexiconHits {
        let bytes = lowered.as_bytes();
        let mut counts = vec![0usize; self.group_count];
        let mut scores = vec![0.0f64; self.group_count];

        for mat in self.matcher.find_iter(lowered) {
            if !on_word_boundary(bytes, mat.start(), mat.end()) {
                continue;
            }
            let pattern = mat.pattern().as_usize();
            let group = self.group_of[pattern];
            counts[group] += 1;
            scores[group] += self.weights[pattern];
        }

        LexiconHits { counts, scores }
    }
}

fn on_word_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEGATIVE: TermGroup = &[("rigged", -2.5), ("rigged system", -3.0), ("corrupt", -3.0)];
    const POSITIVE: TermGroup = &[("the people", 1.5), ("ordinary", 1.0)];

    #[test]
    fn test_longest_phrase_wins() {
        let lexicon = WeightedLexicon::new(&[NEGATIVE, POSITIVE]);
        let hits = lexicon.scan("the rigged system hurts the people");
        // "rigged system" fires once; bare "rigged" does not also fire.
        assert_eq!(hits.count(0), 1);
        assert_eq!(hits.score(0), -3.0);
        assert_eq!(hits.count(1), 1);
        assert_eq!(hits.score(1), 1.5);
    }

    #[test]
    fn test_word_boundaries_block_substrings() {
        let lexicon = WeightedLexicon::new(&[NEGATIVE]);
        // "corrupt" sits inside "incorruptible" but not on a word boundary.
        let hits = lexicon.scan("an incorruptible official");
        assert_eq!(hits.total_count(), 0);
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let lexicon = WeightedLexicon::new(&[NEGATIVE]);
        let hits = lexicon.scan("corrupt deals by corrupt officials");
        assert_eq!(hits.count(0), 2);
        assert_eq!(hits.score(0), -6.0);
    }

    #[test]
    fn test_empty_text() {
        let lexicon = WeightedLexicon::new(&[NEGATIVE, POSITIVE]);
        let hits = lexicon.scan("");
        assert_eq!(hits.total_count(), 0);
        assert_eq!(hits.total_score(), 0.0);
    }
}
