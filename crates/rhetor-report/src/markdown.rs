//! Markdown report rendering.

use crate::sections::{fmt_plain, fmt_signed, SummarySection};

/// Markdown formatter for summary sections.
pub struct MarkdownReport {
    decimals: usize,
}

impl MarkdownReport {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Render a titled document with one table per section.
    pub fn render(&self, title: &str, sections: &[SummarySection]) -> String {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", escape_markdown_header(title)));

        for section in sections {
            md.push_str(&format!("## {}\n\n", escape_markdown_header(&section.heading)));
            md.push_str("| group | n | mean | median | std dev | min | max |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
            for (key, summary) in &section.entries {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} |\n",
                    escape_cell(key),
                    summary.n,
                    fmt_signed(summary.mean, self.decimals),
                    fmt_signed(summary.median, self.decimals),
                    fmt_plain(summary.stddev, self.decimals),
                    fmt_signed(summary.min, self.decimals),
                    fmt_signed(summary.max, self.decimals),
                ));
            }
            md.push('\n');
        }

        md
    }
}

impl Default for MarkdownReport {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Escape markdown injection in headers.
fn escape_markdown_header(s: &str) -> String {
    s.replace('#', "\\#").replace('\n', " ").replace('\r', "")
}

/// Keep table cells on one row.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
