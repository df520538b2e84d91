// crates/ports/src/tokenizer.rs
use std::sync::Arc;

use indic_eval_shared_kernel::{ModelId, Result};

/// A model's tokenizer.
pub trait Tokenizer: Send + Sync {
    fn model(&self) -> &ModelId;

    /// Token strings for `text`, without special tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// The designated unknown token, when the vocabulary has one.
    fn unk_token(&self) -> Option<&str>;
}

/// Port for resolving a model identifier to its tokenizer.
pub trait TokenizerProvider: Send + Sync {
    fn load(&self, model: &ModelId) -> Result<Arc<dyn Tokenizer>>;
}
