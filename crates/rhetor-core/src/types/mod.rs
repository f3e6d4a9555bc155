//! Speech record model: categories, countries, validated records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN, YEAR_MAX, YEAR_MIN};

/// Researcher-assigned framing category. Exhaustive and exclusive:
/// every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mainstream,
    Populist,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Mainstream, Category::Populist]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Mainstream => "mainstream",
            Category::Populist => "populist",
        }
    }
}

impl FromStr for Category {
    type Err = RecordViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainstream" => Ok(Category::Mainstream),
            "populist" => Ok(Category::Populist),
            _ => Err(RecordViolation::UnknownCategory(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Country of the speech. The corpus covers the UK and the USA only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "USA")]
    Usa,
}

impl Country {
    pub fn all() -> &'static [Country] {
        &[Country::Uk, Country::Usa]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::Uk => "UK",
            Country::Usa => "USA",
        }
    }
}

impl FromStr for Country {
    type Err = RecordViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" | "united kingdom" => Ok(Country::Uk),
            "usa" | "us" | "united states" => Ok(Country::Usa),
            _ => Err(RecordViolation::UnknownCountry(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a raw corpus row was rejected during ingestion.
///
/// Rejections are not errors: the offending row is excluded from all
/// computation and counted, and the pipeline continues.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordViolation {
    MissingField(&'static str),
    UnknownCategory(String),
    UnknownCountry(String),
    UnparsableYear(String),
    YearOutOfRange(u16),
    UnparsableScore(String),
    ScoreOutOfRange(f64),
    MalformedRow(String),
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordViolation::MissingField(field) => write!(f, "missing field '{field}'"),
            RecordViolation::UnknownCategory(raw) => write!(f, "unknown category '{raw}'"),
            RecordViolation::UnknownCountry(raw) => write!(f, "unknown country '{raw}'"),
            RecordViolation::UnparsableYear(raw) => write!(f, "unparsable year '{raw}'"),
            RecordViolation::YearOutOfRange(year) => {
                write!(f, "year {year} outside [{YEAR_MIN}, {YEAR_MAX}]")
            }
            RecordViolation::UnparsableScore(raw) => write!(f, "unparsable score '{raw}'"),
            RecordViolation::ScoreOutOfRange(score) => {
                write!(f, "score {score} outside [{SCORE_MIN}, {SCORE_MAX}]")
            }
            RecordViolation::MalformedRow(message) => write!(f, "malformed row: {message}"),
        }
    }
}

/// Identifying metadata of one transcript, shared by the scored-record
/// path and the feature-extraction path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechMeta {
    pub speech_id: String,
    pub speaker: String,
    pub category: Category,
    pub country: Country,
    pub year: u16,
}

impl SpeechMeta {
    pub fn validate(&self) -> Result<(), RecordViolation> {
        if self.speaker.trim().is_empty() {
            return Err(RecordViolation::MissingField("speaker"));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(RecordViolation::YearOutOfRange(self.year));
        }
        Ok(())
    }
}

/// One analyzed transcript with its upstream-computed sentiment score.
///
/// `sentiment_score` is the arithmetic mean of per-sentence polarity
/// scores for the speech, produced by the external sentiment tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecord {
    pub speech_id: String,
    pub speaker: String,
    pub category: Category,
    pub country: Country,
    pub year: u16,
    pub sentiment_score: f64,
}

impl SpeechRecord {
    /// Check the record invariants, returning the first violation found.
    pub fn validate(&self) -> Result<(), RecordViolation> {
        if self.speaker.trim().is_empty() {
            return Err(RecordViolation::MissingField("speaker"));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(RecordViolation::YearOutOfRange(self.year));
        }
        if !self.sentiment_score.is_finite()
            || self.sentiment_score < SCORE_MIN
            || self.sentiment_score > SCORE_MAX
        {
            return Err(RecordViolation::ScoreOutOfRange(self.sentiment_score));
        }
        Ok(())
    }
}

/// A transcript paired with its full cleaned text, for the detector
/// pipeline.
#[derive(Debug, Clone)]
pub struct SpeechDocument {
    pub meta: SpeechMeta,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("Populist".parse::<Category>().unwrap(), Category::Populist);
        assert_eq!(" MAINSTREAM ".parse::<Category>().unwrap(), Category::Mainstream);
        assert!("centrist".parse::<Category>().is_err());
    }

    #[test]
    fn test_country_aliases() {
        assert_eq!("UK".parse::<Country>().unwrap(), Country::Uk);
        assert_eq!("United Kingdom".parse::<Country>().unwrap(), Country::Uk);
        assert_eq!("us".parse::<Country>().unwrap(), Country::Usa);
        assert_eq!("USA".parse::<Country>().unwrap(), Country::Usa);
        assert!("France".parse::<Country>().is_err());
    }

    #[test]
    fn test_record_validation_rejects_out_of_range_score() {
        let mut record = sample_record();
        record.sentiment_score = 1.5;
        assert!(matches!(
            record.validate(),
            Err(RecordViolation::ScoreOutOfRange(_))
        ));
        record.sentiment_score = f64::NAN;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_validation_rejects_bad_year() {
        let mut record = sample_record();
        record.year = 1066;
        assert!(matches!(
            record.validate(),
            Err(RecordViolation::YearOutOfRange(1066))
        ));
    }

    #[test]
    fn test_record_validation_accepts_boundary_scores() {
        let mut record = sample_record();
        record.sentiment_score = -1.0;
        assert!(record.validate().is_ok());
        record.sentiment_score = 1.0;
        assert!(record.validate().is_ok());
    }

    fn sample_record() -> SpeechRecord {
        SpeechRecord {
            speech_id: "farage_2016".into(),
            speaker: "Farage".into(),
            category: Category::Populist,
            country: Country::Uk,
            year: 2016,
            sentiment_score: 0.1,
        }
    }
}
