use std::collections::BTreeMap;

use indic_eval_shared_kernel::{Accuracy, DomainError, DomainResult};

/// Share of positions where `predicted` equals `truth`.
///
/// Empty input yields a not-evaluated accuracy rather than an error.
pub fn accuracy<T: PartialEq>(truth: &[T], predicted: &[T]) -> DomainResult<Accuracy> {
    ensure_same_len(truth.len(), predicted.len())?;
    let correct = truth.iter().zip(predicted).filter(|(t, p)| t == p).count();
    Ok(Accuracy::from_counts(correct, truth.len()))
}

/// Accuracy sliced by `groups`, keyed and ordered by group.
pub fn grouped_accuracy<T, G>(truth: &[T], predicted: &[T], groups: &[G]) -> DomainResult<BTreeMap<G, Accuracy>>
where
    T: PartialEq,
    G: Ord + Clone,
{
    ensure_same_len(truth.len(), predicted.len())?;
    ensure_same_len(truth.len(), groups.len())?;

    let mut tallies: BTreeMap<G, (usize, usize)> = BTreeMap::new();
    for ((t, p), g) in truth.iter().zip(predicted).zip(groups) {
        let entry = tallies.entry(g.clone()).or_insert((0, 0));
        if t == p {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    Ok(tallies
        .into_iter()
        .map(|(group, (correct, total))| (group, Accuracy::from_counts(correct, total)))
        .collect())
}

fn ensure_same_len(expected: usize, actual: usize) -> DomainResult<()> {
    if expected == actual { Ok(()) } else { Err(DomainError::DimensionMismatch { expected, actual }) }
}
