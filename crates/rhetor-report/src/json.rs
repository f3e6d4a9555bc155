//! JSON summary export.

use serde::Serialize;

use rhetor_analysis::aggregate::GroupSummary;
use rhetor_core::errors::ReportError;

use crate::sections::SummarySection;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSection<'a> {
    heading: &'a str,
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    key: &'a str,
    #[serde(flatten)]
    summary: GroupSummary,
}

/// JSON formatter for summary sections.
pub struct JsonReport;

impl JsonReport {
    pub fn new() -> Self {
        Self
    }

    /// Render pretty-printed JSON. Section and group order is preserved
    /// from the input, so output is deterministic.
    pub fn render(&self, title: &str, sections: &[SummarySection]) -> Result<String, ReportError> {
        let document = JsonDocument {
            title,
            sections: sections
                .iter()
                .map(|section| JsonSection {
                    heading: &section.heading,
                    groups: section
                        .entries
                        .iter()
                        .map(|(key, summary)| JsonGroup {
                            key,
                            summary: *summary,
                        })
                        .collect(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(|e| ReportError::Serialize {
            message: e.to_string(),
        })
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let sections = vec![SummarySection::new(
            "By country",
            vec![(
                "UK".to_string(),
                GroupSummary {
                    n: 14,
                    mean: 0.12,
                    median: 0.1,
                    stddev: 0.05,
                    min: -0.02,
                    max: 0.3,
                },
            )],
        )];
        let json = JsonReport::new().render("summary", &sections).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "summary");
        assert_eq!(value["sections"][0]["heading"], "By country");
        assert_eq!(value["sections"][0]["groups"][0]["key"], "UK");
        assert_eq!(value["sections"][0]["groups"][0]["n"], 14);
        assert!((value["sections"][0]["groups"][0]["mean"].as_f64().unwrap() - 0.12).abs() < 1e-12);
    }
}
