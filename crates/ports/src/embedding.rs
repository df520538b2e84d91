// crates/ports/src/embedding.rs
use indic_eval_shared_kernel::{ModelId, Result};

/// Port producing one fixed-width vector per text for a given model.
pub trait Embedder: Send + Sync {
    fn embed(&self, model: &ModelId, texts: &[&str]) -> Result<Vec<Vec<f32>>>;
}
