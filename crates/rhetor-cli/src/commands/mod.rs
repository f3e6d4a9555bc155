//! CLI subcommands.

pub mod aggregate;
pub mod features;
pub mod report;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use rhetor_analysis::aggregate::{sorted_entries, Aggregator, GroupBy, SummaryOrder};
use rhetor_core::errors::{ConfigError, PipelineError};
use rhetor_core::types::SpeechRecord;
use rhetor_report::SummarySection;

/// Grouping dimension as a CLI flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupByArg {
    Category,
    Country,
    Speaker,
    Year,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Category => GroupBy::Category,
            GroupByArg::Country => GroupBy::Country,
            GroupByArg::Speaker => GroupBy::Speaker,
            GroupByArg::Year => GroupBy::Year,
        }
    }
}

impl fmt::Display for GroupByArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GroupBy::from(*self).name())
    }
}

/// Output format as a CLI flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Text,
    Json,
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatArg::Markdown => "markdown",
            FormatArg::Text => "text",
            FormatArg::Json => "json",
        };
        f.write_str(name)
    }
}

/// Resolve the presentation order for one grouping: an explicit order
/// wins; otherwise year tables render chronologically and everything
/// else follows the configured default.
pub fn resolve_order(
    configured: &str,
    group_by: GroupBy,
    explicit: Option<SummaryOrder>,
) -> Result<SummaryOrder, PipelineError> {
    if let Some(order) = explicit {
        return Ok(order);
    }
    if group_by == GroupBy::Year {
        return Ok(SummaryOrder::KeyAscending);
    }
    SummaryOrder::from_str(configured).map_err(|message| {
        PipelineError::Config(ConfigError::InvalidValue {
            field: "report.order".to_string(),
            message,
        })
    })
}

/// Aggregate one grouping into a renderable section.
pub fn summary_section(
    records: &[SpeechRecord],
    group_by: GroupBy,
    order: SummaryOrder,
) -> SummarySection {
    let map = Aggregator::summarize(records, group_by);
    let entries = sorted_entries(map, order)
        .into_iter()
        .map(|(key, summary)| (key.to_string(), summary))
        .collect();
    SummarySection::new(format!("By {}", group_by.name()), entries)
}
