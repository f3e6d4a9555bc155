//! Tokenization and sentence segmentation shared by the detectors.

use std::sync::OnceLock;

use regex::Regex;

static PUNCT: OnceLock<Regex> = OnceLock::new();

fn punct() -> &'static Regex {
    PUNCT.get_or_init(|| Regex::new(r"[^\w\s]").expect("hardcoded regex"))
}

/// Lowercase, strip punctuation to spaces, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = punct().replace_all(&lowered, " ");
    stripped
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

/// Split into sentences on `.`, `!`, `?`, discarding empty fragments.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
