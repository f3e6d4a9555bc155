//! Transcript loading for the detector pipeline.

use std::path::Path;

use rhetor_core::errors::CorpusError;
use rhetor_core::types::{RecordViolation, SpeechDocument, SpeechMeta};
use tracing::{info, warn};

use crate::metadata::MetadataRow;
use crate::scores::RejectedRow;

/// A labeled corpus ready for feature extraction, plus everything that
/// was excluded on the way in.
#[derive(Debug, Clone, Default)]
pub struct CorpusIngest {
    pub documents: Vec<SpeechDocument>,
    pub rejected: Vec<RejectedRow>,
    /// Metadata rows whose transcript file was absent from the corpus
    /// directory.
    pub missing_files: Vec<String>,
}

/// Pair metadata rows with their transcript texts.
///
/// Rows with invalid labels are rejected; rows whose transcript file is
/// missing are skipped and listed. Any other I/O failure is a fault.
pub fn load_corpus(corpus_dir: &Path, rows: &[MetadataRow]) -> Result<CorpusIngest, CorpusError> {
    if !corpus_dir.is_dir() {
        return Err(CorpusError::CorpusDirNotFound {
            path: corpus_dir.display().to_string(),
        });
    }

    let mut ingest = CorpusIngest::default();
    for (row_idx, row) in rows.iter().enumerate() {
        let line = row_idx + 2;

        let meta = match build_meta(row) {
            Ok(meta) => meta,
            Err(violation) => {
                warn!(line, speech_id = %row.speech_id, %violation, "excluding speech with malformed metadata");
                ingest.rejected.push(RejectedRow {
                    line,
                    speech_id: row.speech_id.clone(),
                    violation,
                });
                continue;
            }
        };

        let path = corpus_dir.join(&row.filename);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(filename = %row.filename, "transcript not found, skipping");
                ingest.missing_files.push(row.filename.clone());
                continue;
            }
            Err(e) => {
                return Err(CorpusError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        ingest.documents.push(SpeechDocument { meta, text });
    }

    info!(
        documents = ingest.documents.len(),
        rejected = ingest.rejected.len(),
        missing = ingest.missing_files.len(),
        "loaded corpus"
    );
    Ok(ingest)
}

fn build_meta(row: &MetadataRow) -> Result<SpeechMeta, RecordViolation> {
    if row.speaker.is_empty() {
        return Err(RecordViolation::MissingField("speaker"));
    }
    if row.category.is_empty() {
        return Err(RecordViolation::MissingField("category"));
    }
    if row.country.is_empty() {
        return Err(RecordViolation::MissingField("country"));
    }
    let meta = SpeechMeta {
        speech_id: row.speech_id.clone(),
        speaker: row.speaker.clone(),
        category: row.category.parse()?,
        country: row.country.parse()?,
        year: row
            .year
            .ok_or_else(|| RecordViolation::UnparsableYear(row.date.clone()))?,
    };
    meta.validate()?;
    Ok(meta)
}
