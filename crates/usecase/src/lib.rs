//! # Use Cases
//!
//! Application-level evaluation workflows.
//!
//! This crate coordinates domain logic and the ports to implement:
//!
//! - [`tokenization`]: tokenizer efficiency per model and language
//! - [`probe`]: linear-probe LID, news classification and imbalance runs
//! - [`smoke`]: script detection over the head of a dataset
//! - [`orchestrator`]: the full run writing every report artifact
//! - [`dto`]: report rows for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod probe;
pub mod smoke;
pub mod tokenization;

pub use dto::{AccuracyRow, ImbalanceRow, ScriptAnnotation, Summary, TokenizationRow};
pub use orchestrator::{RunAll, RunSettings};
pub use probe::{LinearProbe, ProbeReport, ProbeSettings, ProbeTask};
pub use tokenization::AnalyzeTokenization;
