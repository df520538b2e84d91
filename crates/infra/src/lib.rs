//! # Infrastructure
//!
//! Adapters implementing the ports against files and model assets.
//!
//! - [`delimited`]: CSV report tables and the CSV dataset source
//! - [`persistence`]: atomic file writes and the report sink
//! - [`tokenizer`]: Hugging Face `tokenizer.json` tokenizers
//! - [`embedding`]: token-hash embeddings for the linear probe
//! - [`chart`]: SVG bar charts
//! - [`gallery`]: browsing the generated images

#![allow(clippy::multiple_crate_versions)]

pub mod chart;
pub mod delimited;
pub mod embedding;
pub mod gallery;
pub mod persistence;
pub mod tokenizer;

pub use chart::SvgChartRenderer;
pub use delimited::CsvDatasetSource;
pub use embedding::TokenHashEmbedder;
pub use gallery::{Gallery, ImageSort};
pub use persistence::{FileWriter, FsReportSink};
pub use tokenizer::HfTokenizerProvider;
