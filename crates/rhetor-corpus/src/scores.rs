//! Scored-results ingestion.
//!
//! The upstream sentiment tool exports one row per speech, joining the
//! metadata columns with its score columns. This loader turns that file
//! into validated `SpeechRecord`s, excluding malformed rows per the
//! rejection policy.

use std::path::Path;

use rhetor_core::types::{RecordViolation, SpeechRecord};
use rhetor_core::errors::CorpusError;
use tracing::{info, warn};

use crate::rows::{extract_year, speech_id, HeaderMap};

/// A row excluded from all computation, with its reason.
#[derive(Debug, Clone)]
pub struct RejectedRow {
    /// 1-based CSV line number (header is line 1).
    pub line: usize,
    pub speech_id: String,
    pub violation: RecordViolation,
}

/// Outcome of an ingestion pass: the valid records plus everything that
/// was excluded.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub records: Vec<SpeechRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl IngestReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Load the scored-results CSV.
///
/// Required columns (case-insensitive): `filename`, `speaker`,
/// `country`, `category`, and the configured score column. The year
/// comes from a `year` column when present, otherwise from the final
/// component of a `DD/MM/YYYY` `date` column.
pub fn load_scored_records(
    path: &Path,
    score_column: &str,
    cleaned_suffix: &str,
) -> Result<IngestReport, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::ScoresNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| CorpusError::Csv {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let headers = reader.headers().map_err(|e| CorpusError::Csv {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let map = HeaderMap::new(headers);

    for required in ["filename", "speaker", "country", "category", score_column] {
        if map.index_of(required).is_none() {
            return Err(CorpusError::MissingColumn {
                column: required.to_string(),
                path: path.display().to_string(),
            });
        }
    }
    if map.index_of("year").is_none() && map.index_of("date").is_none() {
        return Err(CorpusError::MissingColumn {
            column: "year".to_string(),
            path: path.display().to_string(),
        });
    }

    let mut report = IngestReport::default();
    for (row_idx, record) in reader.records().enumerate() {
        let line = row_idx + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                // An unreadable line is a malformed record, not a fault.
                reject(&mut report, line, String::new(), RecordViolation::MalformedRow(e.to_string()));
                continue;
            }
        };

        let id = map
            .get(&record, "filename")
            .map(|f| speech_id(f, cleaned_suffix))
            .unwrap_or_default();

        match build_record(&map, &record, score_column, &id) {
            Ok(speech) => report.records.push(speech),
            Err(violation) => reject(&mut report, line, id, violation),
        }
    }

    info!(
        records = report.records.len(),
        rejected = report.rejected_count(),
        path = %path.display(),
        "ingested scored records"
    );
    Ok(report)
}

fn build_record(
    map: &HeaderMap,
    record: &csv::StringRecord,
    score_column: &str,
    id: &str,
) -> Result<SpeechRecord, RecordViolation> {
    if id.is_empty() {
        return Err(RecordViolation::MissingField("filename"));
    }
    let speaker = map
        .get(record, "speaker")
        .ok_or(RecordViolation::MissingField("speaker"))?;
    let category = map
        .get(record, "category")
        .ok_or(RecordViolation::MissingField("category"))?
        .parse()?;
    let country = map
        .get(record, "country")
        .ok_or(RecordViolation::MissingField("country"))?
        .parse()?;

    let year = match map.get(record, "year") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| RecordViolation::UnparsableYear(raw.to_string()))?,
        None => {
            let date = map
                .get(record, "date")
                .ok_or(RecordViolation::MissingField("year"))?;
            extract_year(date).ok_or_else(|| RecordViolation::UnparsableYear(date.to_string()))?
        }
    };

    let raw_score = map
        .get(record, score_column)
        .ok_or(RecordViolation::MissingField("sentiment score"))?;
    let sentiment_score = raw_score
        .parse::<f64>()
        .map_err(|_| RecordViolation::UnparsableScore(raw_score.to_string()))?;

    let speech = SpeechRecord {
        speech_id: id.to_string(),
        speaker: speaker.to_string(),
        category,
        country,
        year,
        sentiment_score,
    };
    speech.validate()?;
    Ok(speech)
}

fn reject(report: &mut IngestReport, line: usize, speech_id: String, violation: RecordViolation) {
    warn!(line, speech_id = %speech_id, %violation, "excluding malformed record");
    report.rejected.push(RejectedRow {
        line,
        speech_id,
        violation,
    });
}
