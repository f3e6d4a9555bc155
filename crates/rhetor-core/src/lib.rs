//! Core types, errors, config, tracing, and constants for the rhetor
//! corpus analyzer.
//!
//! Everything shared across the ingestion, analysis, and reporting crates
//! lives here: the speech record model and its validation rules, the
//! per-domain error enums with stable error codes, layered TOML
//! configuration, and tracing initialization.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
