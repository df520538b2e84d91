//! Evaluation metrics: tokenizer efficiency and (grouped) accuracy.

pub mod accuracy;
pub mod tokenization;

pub use accuracy::{accuracy, grouped_accuracy};
pub use tokenization::{TokenizationStats, TokenizationTally};
