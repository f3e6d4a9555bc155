//! Tests for layered configuration resolution.

use std::path::PathBuf;

use rhetor_core::config::{CliOverrides, RhetorConfig};

#[test]
fn test_load_without_project_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RhetorConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.corpus.score_column, "sentence_mean");
    assert_eq!(config.report.order, "mean-desc");
}

#[test]
fn test_load_reads_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rhetor.toml"),
        r#"
        [corpus]
        scores_file = "results/scored.csv"

        [analysis]
        detectors = ["pronouns"]
        parallel = false
        "#,
    )
    .unwrap();

    let config = RhetorConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.corpus.scores_file, PathBuf::from("results/scored.csv"));
    assert_eq!(config.analysis.detectors, vec!["pronouns".to_string()]);
    assert!(!config.analysis.parallel);
}

#[test]
fn test_cli_layer_overrides_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rhetor.toml"),
        r#"
        [report]
        order = "key-asc"
        "#,
    )
    .unwrap();

    let cli = CliOverrides {
        order: Some("count-desc".to_string()),
        ..Default::default()
    };
    let config = RhetorConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.report.order, "count-desc");
}

#[test]
fn test_load_rejects_invalid_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rhetor.toml"),
        r#"
        [report]
        decimals = 12
        "#,
    )
    .unwrap();

    assert!(RhetorConfig::load(dir.path(), None).is_err());
}
