//! `rhetor aggregate`: grouped sentiment statistics.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use tracing::warn;

use rhetor_analysis::aggregate::SummaryOrder;
use rhetor_core::config::{CliOverrides, RhetorConfig};
use rhetor_core::errors::{ConfigError, PipelineError, ReportError};
use rhetor_corpus::load_scored_records;
use rhetor_report::{JsonReport, MarkdownReport, SummarySection, TextReport};

use super::{resolve_order, summary_section, FormatArg, GroupByArg};

#[derive(Args)]
pub struct AggregateArgs {
    /// Scored-results CSV (overrides config)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Groupings to compute, repeatable
    #[arg(long = "group-by", value_enum, default_values_t = [GroupByArg::Category])]
    pub group_by: Vec<GroupByArg>,

    /// Presentation order: mean-desc, key-asc, or count-desc
    #[arg(long)]
    pub order: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Markdown)]
    pub format: FormatArg,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(root: &Path, args: AggregateArgs) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        scores_file: args.scores.clone(),
        ..Default::default()
    };
    let config = RhetorConfig::load(root, Some(&overrides))?;

    let ingest = load_scored_records(
        &config.corpus.scores_file,
        &config.corpus.score_column,
        &config.corpus.cleaned_suffix,
    )?;
    if ingest.rejected_count() > 0 {
        warn!(
            rejected = ingest.rejected_count(),
            "some records were excluded from aggregation"
        );
    }

    let explicit = match &args.order {
        Some(raw) => Some(SummaryOrder::from_str(raw).map_err(|message| {
            PipelineError::Config(ConfigError::InvalidValue {
                field: "order".to_string(),
                message,
            })
        })?),
        None => None,
    };

    let mut sections = Vec::new();
    for group_by in &args.group_by {
        let group_by = (*group_by).into();
        let order = resolve_order(&config.report.order, group_by, explicit)?;
        sections.push(summary_section(&ingest.records, group_by, order));
    }

    let rendered = render(&args.format, &config, "Sentiment summary", &sections)?;
    emit(&rendered, args.out.as_deref())?;
    Ok(())
}

pub fn render(
    format: &FormatArg,
    config: &RhetorConfig,
    title: &str,
    sections: &[SummarySection],
) -> Result<String, PipelineError> {
    let decimals = config.report.decimals;
    let out = match format {
        FormatArg::Markdown => MarkdownReport::new(decimals).render(title, sections),
        FormatArg::Text => TextReport::new(decimals).render(title, sections),
        FormatArg::Json => JsonReport::new().render(title, sections)?,
    };
    Ok(out)
}

pub fn emit(rendered: &str, out: Option<&Path>) -> Result<(), PipelineError> {
    match out {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| ReportError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            println!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
