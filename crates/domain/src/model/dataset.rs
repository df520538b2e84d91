use std::collections::BTreeSet;

use indic_eval_shared_kernel::LangCode;
use serde::{Deserialize, Serialize};

/// One labelled row of an evaluation dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub text: String,
    pub lang: LangCode,
    /// Topic label for classification datasets; empty for LID-only data.
    #[serde(default)]
    pub label: String,
}

impl Sample {
    pub fn new(text: impl Into<String>, lang: impl Into<LangCode>, label: impl Into<String>) -> Self {
        Self { text: text.into(), lang: lang.into(), label: label.into() }
    }

    /// Value of `column` for this row.
    pub fn target(&self, column: LabelColumn) -> &str {
        match column {
            LabelColumn::Lang => self.lang.as_str(),
            LabelColumn::Label => &self.label,
        }
    }
}

/// Column a probe is trained to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColumn {
    Lang,
    Label,
}

impl LabelColumn {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lang => "lang",
            Self::Label => "label",
        }
    }
}

/// Ordered collection of samples, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Distinct languages, sorted.
    pub fn languages(&self) -> Vec<LangCode> {
        self.samples.iter().map(|s| s.lang.clone()).collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Distinct non-empty topic labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        self.samples
            .iter()
            .map(|s| s.label.as_str())
            .filter(|l| !l.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows of one language, keeping their relative order.
    pub fn by_lang(&self, lang: &str) -> Self {
        Self::new(self.samples.iter().filter(|s| s.lang == lang).cloned().collect())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn targets(&self, column: LabelColumn) -> Vec<&str> {
        self.samples.iter().map(|s| s.target(column)).collect()
    }

    /// First `n` rows (or all rows when shorter).
    pub fn head(&self, n: usize) -> &[Sample] {
        &self.samples[..n.min(self.samples.len())]
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
