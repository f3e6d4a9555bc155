//! `rhetor features`: rhetorical feature extraction.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use rhetor_analysis::detectors::DetectorRegistry;
use rhetor_analysis::engine::{FeatureEngine, FeatureMatrix};
use rhetor_core::config::{CliOverrides, RhetorConfig};
use rhetor_core::errors::{PipelineError, ReportError};
use rhetor_corpus::{load_corpus, load_metadata};
use rhetor_report::{write_feature_matrix, MarkdownReport, SummarySection};

/// Headline metrics summarized by category after extraction.
const HEADLINE_METRICS: &[&str] = &[
    "anti_elite_density",
    "crisis_density",
    "certainty_hedging_ratio",
    "we_they_ratio",
    "flesch_reading_ease",
];

#[derive(Args)]
pub struct FeaturesArgs {
    /// Metadata CSV (overrides config)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Corpus directory of cleaned transcripts (overrides config)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Output directory for the feature matrix CSV (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(root: &Path, args: FeaturesArgs) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        metadata_file: args.metadata.clone(),
        corpus_dir: args.corpus.clone(),
        out_dir: args.out_dir.clone(),
        ..Default::default()
    };
    let config = RhetorConfig::load(root, Some(&overrides))?;

    let matrix = extract(&config)?;

    std::fs::create_dir_all(&config.report.out_dir).map_err(|e| ReportError::Io {
        path: config.report.out_dir.display().to_string(),
        source: e,
    })?;
    let matrix_path = config.report.out_dir.join("features_combined.csv");
    write_feature_matrix(&matrix, &matrix_path)?;
    println!("wrote {}", matrix_path.display());

    let sections = headline_sections(&matrix);
    print!(
        "{}",
        MarkdownReport::new(config.report.decimals).render("Feature summary by category", &sections)
    );
    Ok(())
}

/// Run the configured detector set over the corpus.
pub fn extract(config: &RhetorConfig) -> Result<FeatureMatrix, PipelineError> {
    let metadata = load_metadata(&config.corpus.metadata_file, &config.corpus.cleaned_suffix)?;
    let ingest = load_corpus(&config.corpus.corpus_dir, &metadata)?;
    if !ingest.rejected.is_empty() || !ingest.missing_files.is_empty() {
        warn!(
            rejected = ingest.rejected.len(),
            missing = ingest.missing_files.len(),
            "some speeches were excluded from feature extraction"
        );
    }

    let registry = DetectorRegistry::with_enabled(&config.analysis.detectors);
    let engine = FeatureEngine::new(registry).with_parallel(config.analysis.parallel);
    Ok(engine.run(&ingest.documents))
}

/// By-category summaries of the headline metrics present in the matrix.
pub fn headline_sections(matrix: &FeatureMatrix) -> Vec<SummarySection> {
    HEADLINE_METRICS
        .iter()
        .copied()
        .filter(|metric| matrix.columns.contains(metric))
        .map(|metric| {
            let entries = matrix
                .category_summary(metric)
                .into_iter()
                .map(|(category, summary)| (category.name().to_string(), summary))
                .collect();
            SummarySection::new(metric.to_string(), entries)
        })
        .collect()
}
