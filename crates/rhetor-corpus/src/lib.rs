//! Corpus ingestion.
//!
//! Three inputs feed the pipeline: the metadata CSV tracking every
//! speech, the scored-results CSV exported by the upstream sentiment
//! tool, and the directory of preprocessed transcripts. Malformed rows
//! are excluded and counted, never fatal; missing files and unreadable
//! CSVs are faults.

pub mod loader;
pub mod metadata;
pub mod rows;
pub mod scores;

pub use loader::{load_corpus, CorpusIngest};
pub use metadata::{load_metadata, MetadataRow};
pub use scores::{load_scored_records, IngestReport, RejectedRow};
