//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`tokenizer`]: pretrained tokenizers and their unknown token
//! - [`embedding`]: text embeddings fed to the linear probe
//! - [`chart`]: bar-chart rendering for reports
//! - [`dataset`]: labelled evaluation datasets
//! - [`report`]: CSV and JSON report artifacts
//!
//! These ports keep the use cases independent of model files, plotting and
//! file formats.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod chart;
pub mod dataset;
pub mod embedding;
pub mod report;
pub mod tokenizer;
