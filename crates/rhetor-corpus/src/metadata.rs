//! Metadata CSV loading.

use std::path::Path;

use rhetor_core::errors::CorpusError;
use tracing::info;

use crate::rows::{cleaned_filename, extract_year, speech_id, HeaderMap};

/// One raw metadata row. Country and category stay unparsed here;
/// validation happens when records are built.
#[derive(Debug, Clone)]
pub struct MetadataRow {
    /// Preprocessed transcript filename (`<stem>_cleaned.txt`).
    pub filename: String,
    /// Filename as written in the metadata sheet.
    pub original_filename: String,
    pub speech_id: String,
    pub speaker: String,
    pub party: String,
    pub country: String,
    pub category: String,
    pub date: String,
    pub year: Option<u16>,
}

/// Load the metadata CSV that tracks all speeches.
///
/// Required columns (case-insensitive): `filename`, `speaker`,
/// `country`, `category`. `date` and `party` are optional.
pub fn load_metadata(path: &Path, cleaned_suffix: &str) -> Result<Vec<MetadataRow>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::MetadataNotFound {
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

    for required in ["filename", "speaker", "country", "category"] {
        if map.index_of(required).is_none() {
            return Err(CorpusError::MissingColumn {
                column: required.to_string(),
                path: path.display().to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CorpusError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let original_filename = map.get(&record, "filename").unwrap_or_default().to_string();
        let filename = cleaned_filename(&original_filename, cleaned_suffix);
        let date = map.get(&record, "date").unwrap_or_default().to_string();
        let year = extract_year(&date);

        rows.push(MetadataRow {
            speech_id: speech_id(&filename, cleaned_suffix),
            filename,
            original_filename,
            speaker: map.get(&record, "speaker").unwrap_or_default().to_string(),
            party: map.get(&record, "party").unwrap_or_default().to_string(),
            country: map.get(&record, "country").unwrap_or_default().to_string(),
            category: map.get(&record, "category").unwrap_or_default().to_string(),
            date,
            year,
        });
    }

    info!(count = rows.len(), path = %path.display(), "loaded speech metadata");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_metadata_maps_filenames_and_years() {
        let file = write_csv(
            "Filename,Speaker,Party,Country,Date,Category\n\
             farage_2016.txt,Farage,UKIP,UK,23/06/2016,populist\n\
             obama_2008.txt,Obama,Democrat,USA,04/11/2008,mainstream\n",
        );
        let rows = load_metadata(file.path(), "_cleaned").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "farage_2016_cleaned.txt");
        assert_eq!(rows[0].speech_id, "farage_2016");
        assert_eq!(rows[0].year, Some(2016));
        assert_eq!(rows[1].speaker, "Obama");
    }

    #[test]
    fn test_load_metadata_requires_category_column() {
        let file = write_csv("filename,speaker,country\na.txt,A,UK\n");
        let err = load_metadata(file.path(), "_cleaned").unwrap_err();
        assert!(matches!(err, CorpusError::MissingColumn { column, .. } if column == "category"));
    }

    #[test]
    fn test_load_metadata_missing_file() {
        let err = load_metadata(Path::new("/nonexistent/metadata.csv"), "_cleaned").unwrap_err();
        assert!(matches!(err, CorpusError::MetadataNotFound { .. }));
    }
}
