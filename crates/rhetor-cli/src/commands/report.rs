//! `rhetor report`: full pipeline into report files.
//!
//! Aggregates sentiment over all four groupings, runs the detector set,
//! and writes a Markdown report plus JSON and CSV side-outputs into the
//! output directory.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use rhetor_analysis::aggregate::GroupBy;
use rhetor_core::config::{CliOverrides, RhetorConfig};
use rhetor_core::errors::{PipelineError, ReportError};
use rhetor_corpus::load_scored_records;
use rhetor_report::{
    write_feature_matrix, write_summary_csv, JsonReport, MarkdownReport,
};

use super::features::{extract, headline_sections};
use super::{resolve_order, summary_section};

#[derive(Args)]
pub struct ReportArgs {
    /// Scored-results CSV (overrides config)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Metadata CSV (overrides config)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Corpus directory of cleaned transcripts (overrides config)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Skip the detector pass and report sentiment aggregation only
    #[arg(long)]
    pub skip_features: bool,
}

pub fn run(root: &Path, args: ReportArgs) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        scores_file: args.scores.clone(),
        metadata_file: args.metadata.clone(),
        corpus_dir: args.corpus.clone(),
        out_dir: args.out_dir.clone(),
        ..Default::default()
    };
    let config = RhetorConfig::load(root, Some(&overrides))?;
    let out_dir = config.report.out_dir.clone();
    std::fs::create_dir_all(&out_dir).map_err(|e| ReportError::Io {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    // Sentiment aggregation over every grouping.
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

    let mut sentiment_sections = Vec::new();
    for group_by in GroupBy::all() {
        let order = resolve_order(&config.report.order, *group_by, None)?;
        sentiment_sections.push(summary_section(&ingest.records, *group_by, order));
    }

    let markdown = MarkdownReport::new(config.report.decimals);
    let mut document = markdown.render("Sentiment summary", &sentiment_sections);

    write_summary_csv(&sentiment_sections, &out_dir.join("sentiment_summary.csv"))?;
    let json = JsonReport::new().render("Sentiment summary", &sentiment_sections)?;
    std::fs::write(out_dir.join("sentiment_summary.json"), json).map_err(|e| {
        ReportError::Io {
            path: out_dir.join("sentiment_summary.json").display().to_string(),
            source: e,
        }
    })?;

    // Rhetorical features.
    if !args.skip_features {
        let matrix = extract(&config)?;
        write_feature_matrix(&matrix, &out_dir.join("features_combined.csv"))?;
        let feature_sections = headline_sections(&matrix);
        document.push_str(&markdown.render("Feature summary by category", &feature_sections));
    }

    let report_path = out_dir.join("report.md");
    std::fs::write(&report_path, document).map_err(|e| ReportError::Io {
        path: report_path.display().to_string(),
        source: e,
    })?;
    println!("wrote {}", report_path.display());
    Ok(())
}
