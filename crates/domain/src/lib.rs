//! # Domain
//!
//! Pure evaluation logic with no I/O:
//!
//! - [`script`]: dominant-script detection and code-mixing checks
//! - [`model`]: labelled datasets
//! - [`analytics`]: tokenizer efficiency and accuracy metrics
//! - [`sampling`]: seeded stratified splits and minority downsampling
//! - [`probe`]: logistic-regression linear probe

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod probe;
pub mod sampling;
pub mod script;

pub use model::{Dataset, LabelColumn, Sample};
pub use script::{Script, ScriptCounts, ScriptRange, classify_dominant_script, is_multi_script};
