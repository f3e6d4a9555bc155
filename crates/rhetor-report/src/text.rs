//! Plain-text summary rendering, in the style of the summary sheet
//! that accompanies the scored-results export.

use crate::sections::{fmt_plain, fmt_signed, SummarySection};

/// Plain-text formatter for summary sections.
pub struct TextReport {
    decimals: usize,
}

impl TextReport {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    pub fn render(&self, title: &str, sections: &[SummarySection]) -> String {
        let mut out = String::new();
        out.push_str(&title.to_uppercase());
        out.push('\n');
        out.push_str(&"=".repeat(72));
        out.push_str("\n\n");

        for section in sections {
            out.push_str(&format!("{}:\n", section.heading.to_uppercase()));
            out.push_str(&format!("{}\n", "-".repeat(72)));
            for (key, summary) in &section.entries {
                out.push_str(&format!("\n{key}:\n"));
                out.push_str(&format!("  N = {}\n", summary.n));
                out.push_str(&format!(
                    "  Mean:    {}\n",
                    fmt_signed(summary.mean, self.decimals)
                ));
                out.push_str(&format!(
                    "  Median:  {}\n",
                    fmt_signed(summary.median, self.decimals)
                ));
                out.push_str(&format!(
                    "  Std Dev: {}\n",
                    fmt_plain(summary.stddev, self.decimals)
                ));
                out.push_str(&format!(
                    "  Range:   {} to {}\n",
                    fmt_signed(summary.min, self.decimals),
                    fmt_signed(summary.max, self.decimals)
                ));
            }
            out.push('\n');
        }

        out
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhetor_analysis::aggregate::GroupSummary;

    #[test]
    fn test_text_block_shape() {
        let section = SummarySection::new(
            "By category",
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
        );
        let out = TextReport::new(3).render("Sentiment summary statistics", &[section]);
        assert!(out.starts_with("SENTIMENT SUMMARY STATISTICS\n"));
        assert!(out.contains("BY CATEGORY:"));
        assert!(out.contains("  N = 14"));
        assert!(out.contains("  Mean:    +0.105"));
        assert!(out.contains("  Range:   -0.180 to +0.290"));
    }
}
