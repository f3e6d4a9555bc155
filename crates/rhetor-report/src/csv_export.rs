//! CSV exports: the per-speech feature matrix and per-group summary
//! rows.

use std::path::Path;

use rhetor_analysis::engine::FeatureMatrix;
use rhetor_core::errors::ReportError;

use crate::sections::SummarySection;

/// Write the per-speech feature matrix: metadata columns, then
/// registry-ordered metric columns. Floats are rounded to two decimal
/// places, matching the combined-features export convention.
pub fn write_feature_matrix(matrix: &FeatureMatrix, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;

    let mut header: Vec<&str> = vec![
        "speech_id",
        "speaker",
        "category",
        "country",
        "year",
        "word_count",
    ];
    header.extend(matrix.columns.iter());
    writer.write_record(&header).map_err(|e| csv_error(path, e))?;

    for row in &matrix.rows {
        let mut record: Vec<String> = vec![
            row.meta.speech_id.clone(),
            row.meta.speaker.clone(),
            row.meta.category.name().to_string(),
            row.meta.country.name().to_string(),
            row.meta.year.to_string(),
            row.word_count.to_string(),
        ];
        for column in &matrix.columns {
            let value = row.values.get(column).copied().unwrap_or(0.0);
            record.push(format!("{value:.2}"));
        }
        writer.write_record(&record).map_err(|e| csv_error(path, e))?;
    }

    writer.flush().map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write per-group summary rows across all sections.
pub fn write_summary_csv(sections: &[SummarySection], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;

    writer
        .write_record(["grouping", "group", "n", "mean", "median", "stddev", "min", "max"])
        .map_err(|e| csv_error(path, e))?;

    for section in sections {
        for (key, summary) in &section.entries {
            writer
                .write_record([
                    section.heading.as_str(),
                    key.as_str(),
                    &summary.n.to_string(),
                    &format!("{:.6}", summary.mean),
                    &format!("{:.6}", summary.median),
                    &format!("{:.6}", summary.stddev),
                    &format!("{:.6}", summary.min),
                    &format!("{:.6}", summary.max),
                ])
                .map_err(|e| csv_error(path, e))?;
        }
    }

    writer.flush().map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn csv_error(path: &Path, e: csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhetor_analysis::aggregate::GroupSummary;
    use rhetor_analysis::detectors::DetectorRegistry;
    use rhetor_analysis::engine::FeatureEngine;
    use rhetor_core::types::{Category, Country, SpeechDocument, SpeechMeta};

    #[test]
    fn test_feature_matrix_csv_headers_and_rows() {
        let documents = vec![SpeechDocument {
            meta: SpeechMeta {
                speech_id: "farage_2016".into(),
                speaker: "Farage".into(),
                category: Category::Populist,
                country: Country::Uk,
                year: 2016,
            },
            text: "They betrayed the people. We will take back control.".into(),
        }];
        let matrix = FeatureEngine::new(DetectorRegistry::standard())
            .with_parallel(false)
            .run(&documents);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.csv");
        write_feature_matrix(&matrix, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("speech_id,speaker,category,country,year,word_count"));
        assert!(header.contains("anti_elite_count"));
        assert!(header.contains("flesch_reading_ease"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("farage_2016,Farage,populist,UK,2016,"));
    }

    #[test]
    fn test_summary_csv_rows() {
        let sections = vec![SummarySection::new(
            "category",
            vec![(
                "populist".to_string(),
                GroupSummary {
                    n: 14,
                    mean: 0.105,
                    median: 0.097,
                    stddev: 0.112,
                    min: -0.18,
                    max: 0.29,
                },
            )],
        )];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&sections, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("grouping,group,n,mean,median,stddev,min,max"));
        assert!(content.contains("category,populist,14,0.105000"));
    }
}
