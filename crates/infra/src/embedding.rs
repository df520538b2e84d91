use std::sync::Arc;

use indic_eval_ports::{embedding::Embedder, tokenizer::TokenizerProvider};
use indic_eval_shared_kernel::{ModelId, Result};
use xxhash_rust::xxh3::xxh3_64;

pub const DEFAULT_EMBEDDING_DIM: usize = 512;

/// Bag-of-tokens embedding: each of the model's tokens is hashed into one of
/// `dim` buckets and the counts are L2-normalised.
///
/// Texts that tokenize identically under a model get identical vectors, so
/// probe accuracy reflects how well that model's vocabulary separates them.
pub struct TokenHashEmbedder {
    tokenizers: Arc<dyn TokenizerProvider>,
    dim: usize,
}

impl TokenHashEmbedder {
    pub fn new(tokenizers: Arc<dyn TokenizerProvider>) -> Self {
        Self::with_dim(tokenizers, DEFAULT_EMBEDDING_DIM)
    }

    pub fn with_dim(tokenizers: Arc<dyn TokenizerProvider>, dim: usize) -> Self {
        Self { tokenizers, dim: dim.max(1) }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl Embedder for TokenHashEmbedder {
    fn embed(&self, model: &ModelId, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let tokenizer = self.tokenizers.load(model)?;
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            let mut v = vec![0.0f32; self.dim];
            for token in tokenizer.tokenize(text)? {
                #[allow(clippy::cast_possible_truncation)]
                let bucket = (xxh3_64(token.as_bytes()) % self.dim as u64) as usize;
                v[bucket] += 1.0;
            }
            let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 0.0 {
                v.iter_mut().for_each(|x| *x /= norm);
            }
            out.push(v);
        }
        log::debug!("{model}: embedded {} texts into {} dims", texts.len(), self.dim);
        Ok(out)
    }
}
