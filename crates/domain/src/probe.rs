//! Multinomial logistic regression used as a linear probe over embeddings.

use std::collections::BTreeSet;

use indic_eval_shared_kernel::{DomainError, DomainResult};

/// Training hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeConfig {
    pub max_iter: usize,
    pub learning_rate: f64,
    /// Inverse regularisation strength; the L2 penalty is `1 / (c * n)`.
    pub c: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { max_iter: 200, learning_rate: 1.0, c: 1.0 }
    }
}

/// Softmax classifier trained with full-batch gradient descent from zero
/// weights, so a given input always produces the same model.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    classes: Vec<String>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl LogisticRegression {
    pub fn fit<L: AsRef<str>>(features: &[Vec<f32>], labels: &[L], config: &ProbeConfig) -> DomainResult<Self> {
        if features.is_empty() {
            return Err(DomainError::EmptyDataset { what: "no training rows".to_string() });
        }
        if features.len() != labels.len() {
            return Err(DomainError::DimensionMismatch { expected: features.len(), actual: labels.len() });
        }
        let dim = features[0].len();
        if let Some(bad) = features.iter().find(|row| row.len() != dim) {
            return Err(DomainError::DimensionMismatch { expected: dim, actual: bad.len() });
        }

        let classes: Vec<String> =
            labels.iter().map(|l| l.as_ref().to_string()).collect::<BTreeSet<_>>().into_iter().collect();
        if classes.len() < 2 {
            return Err(DomainError::SingleClass { label: classes.into_iter().next().unwrap_or_default() });
        }
        let targets: Vec<usize> = labels
            .iter()
            .map(|l| classes.binary_search_by(|c| c.as_str().cmp(l.as_ref())).unwrap_or_default())
            .collect();

        let k = classes.len();
        #[allow(clippy::cast_precision_loss)]
        let n = features.len() as f64;
        let l2 = 1.0 / (config.c * n);
        let mut model = Self { classes, weights: vec![vec![0.0; dim]; k], bias: vec![0.0; k] };

        let mut grad_w = vec![vec![0.0; dim]; k];
        let mut grad_b = vec![0.0; k];
        for _ in 0..config.max_iter {
            grad_w.iter_mut().for_each(|row| row.fill(0.0));
            grad_b.fill(0.0);

            for (x, &target) in features.iter().zip(&targets) {
                let probs = model.probabilities(x);
                for (class, p) in probs.into_iter().enumerate() {
                    let err = p - if class == target { 1.0 } else { 0.0 };
                    grad_b[class] += err;
                    for (g, &xi) in grad_w[class].iter_mut().zip(x) {
                        *g += err * f64::from(xi);
                    }
                }
            }

            for class in 0..k {
                for (w, g) in model.weights[class].iter_mut().zip(&grad_w[class]) {
                    *w -= config.learning_rate * (g / n + l2 * *w);
                }
                model.bias[class] -= config.learning_rate * grad_b[class] / n;
            }
        }

        log::debug!("trained probe: {k} classes, {dim} features, {} rows", features.len());
        Ok(model)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Class probabilities for one row, in [`Self::classes`] order.
    pub fn probabilities(&self, x: &[f32]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(w, b)| w.iter().zip(x).map(|(w, &xi)| w * f64::from(xi)).sum::<f64>() + b)
            .collect();
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
        let total: f64 = exp.iter().sum();
        exp.into_iter().map(|e| e / total).collect()
    }

    /// Most probable class; ties go to the lowest class index.
    pub fn predict_one(&self, x: &[f32]) -> DomainResult<&str> {
        if x.len() != self.dim() {
            return Err(DomainError::DimensionMismatch { expected: self.dim(), actual: x.len() });
        }
        let probs = self.probabilities(x);
        let mut best = 0;
        for (idx, &p) in probs.iter().enumerate().skip(1) {
            if p > probs[best] {
                best = idx;
            }
        }
        Ok(&self.classes[best])
    }

    pub fn predict(&self, rows: &[Vec<f32>]) -> DomainResult<Vec<String>> {
        rows.iter().map(|x| self.predict_one(x).map(str::to_string)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (Vec<Vec<f32>>, Vec<&'static str>) {
        let features = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.1, 0.9, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.1, 0.9],
        ];
        (features, vec!["hi", "hi", "bn", "bn", "ta", "ta"])
    }

    #[test]
    fn learns_separable_classes() {
        let (x, y) = separable();
        let model = LogisticRegression::fit(&x, &y, &ProbeConfig::default()).unwrap();
        assert_eq!(model.classes(), ["bn", "hi", "ta"]);
        assert_eq!(model.predict(&x).unwrap(), y);
        assert_eq!(model.predict_one(&[0.8, 0.2, 0.0]).unwrap(), "hi");
    }

    #[test]
    fn probabilities_sum_to_one() {
        let (x, y) = separable();
        let model = LogisticRegression::fit(&x, &y, &ProbeConfig::default()).unwrap();
        let total: f64 = model.probabilities(&x[0]).iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn untrained_ties_pick_first_class() {
        let (x, y) = separable();
        let config = ProbeConfig { max_iter: 0, ..ProbeConfig::default() };
        let model = LogisticRegression::fit(&x, &y, &config).unwrap();
        assert_eq!(model.predict_one(&x[4]).unwrap(), "bn");
    }

    #[test]
    fn single_class_is_rejected() {
        let err = LogisticRegression::fit(&[vec![1.0], vec![2.0]], &["hi", "hi"], &ProbeConfig::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::SingleClass { ref label } if label == "hi"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = LogisticRegression::fit(&[vec![1.0, 0.0], vec![2.0]], &["a", "b"], &ProbeConfig::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::DimensionMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let err = LogisticRegression::fit::<&str>(&[], &[], &ProbeConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyDataset { .. }));
    }

    #[test]
    fn prediction_checks_dimension() {
        let (x, y) = separable();
        let model = LogisticRegression::fit(&x, &y, &ProbeConfig::default()).unwrap();
        assert!(model.predict_one(&[1.0]).is_err());
    }
}
