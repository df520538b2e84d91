// crates/ports/src/dataset.rs
use indic_eval_domain::Dataset;
use indic_eval_shared_kernel::Result;

/// Port for loading a named dataset (`lid_samples.csv`, `news_samples.csv`).
pub trait DatasetSource: Send + Sync {
    fn load(&self, name: &str) -> Result<Dataset>;
}
