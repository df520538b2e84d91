//! Seeded dataset splitting and downsampling.
//!
//! All randomness comes from a `ChaCha8Rng` seeded by the caller so that
//! repeated runs of an evaluation see identical splits.

use std::collections::BTreeMap;

use indic_eval_shared_kernel::{DomainError, DomainResult};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::model::Dataset;

pub const DEFAULT_TEST_SIZE: f64 = 0.3;
pub const DEFAULT_SEED: u64 = 42;

/// Train and held-out row indices, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Splits row indices so every class keeps its share in both halves.
///
/// Per class `round(n * test_size)` rows go to the test side, clamped so each
/// side receives at least one row. Classes are visited in label order and
/// shuffled with one shared RNG stream.
pub fn stratified_split<L: AsRef<str>>(labels: &[L], test_size: f64, seed: u64) -> DomainResult<Split> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(DomainError::InvalidFraction { field: "test_size".to_string(), value: test_size });
    }
    if labels.is_empty() {
        return Err(DomainError::EmptyDataset { what: "nothing to split".to_string() });
    }

    let mut classes: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        classes.entry(label.as_ref()).or_default().push(idx);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for (label, mut members) in classes {
        let n = members.len();
        if n < 2 {
            return Err(DomainError::InsufficientSamples { label: label.to_string(), count: n, required: 2 });
        }
        members.shuffle(&mut rng);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_test = ((n as f64 * test_size).round() as usize).clamp(1, n - 1);
        test.extend_from_slice(&members[..n_test]);
        train.extend_from_slice(&members[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();
    log::debug!("stratified split: {} train / {} test rows", train.len(), test.len());
    Ok(Split { train, test })
}

/// Keeps every row outside `minority_lang` and a seeded sample of
/// `max(1, floor(n * fraction))` minority rows, appended after the majority.
///
/// A dataset without the minority language is returned unchanged.
pub fn downsample_minority(dataset: &Dataset, minority_lang: &str, fraction: f64, seed: u64) -> DomainResult<Dataset> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(DomainError::InvalidFraction { field: "minority_frac".to_string(), value: fraction });
    }

    let (minority, mut kept): (Vec<_>, Vec<_>) =
        dataset.iter().cloned().partition(|sample| sample.lang == minority_lang);
    if minority.is_empty() {
        log::warn!("minority language '{minority_lang}' not present; dataset left unchanged");
        return Ok(dataset.clone());
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n_keep = ((minority.len() as f64 * fraction).floor() as usize).max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kept.extend(minority.choose_multiple(&mut rng, n_keep).cloned());

    log::debug!("downsampled '{minority_lang}' from {} to {n_keep} rows", minority.len());
    Ok(Dataset::new(kept))
}
