//! Linear-probe evaluations: LID, news classification and class imbalance.

use std::collections::BTreeMap;

use indic_eval_domain::{
    Dataset, LabelColumn,
    analytics::{accuracy, grouped_accuracy},
    probe::{LogisticRegression, ProbeConfig},
    sampling::{self, DEFAULT_SEED, DEFAULT_TEST_SIZE},
};
use indic_eval_ports::embedding::Embedder;
use indic_eval_shared_kernel::{Accuracy, ApplicationError, DomainError, EvalError, LangCode, ModelId, Result};
use serde::Serialize;

use crate::dto::{AccuracyRow, OVERALL};

/// Minimum subset size for a per-language probe.
pub const MIN_PER_LANG_ROWS: usize = 4;

/// Evaluation task driven by a linear probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeTask {
    /// Predict the language of each text.
    Lid,
    /// Predict the topic label of each text.
    News,
}

impl ProbeTask {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lid => "lid",
            Self::News => "news",
        }
    }

    pub const fn column(self) -> LabelColumn {
        match self {
            Self::Lid => LabelColumn::Lang,
            Self::News => LabelColumn::Label,
        }
    }

    pub const fn dataset(self) -> &'static str {
        match self {
            Self::Lid => "lid_samples.csv",
            Self::News => "news_samples.csv",
        }
    }
}

/// Split and optimiser settings shared by all probe runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSettings {
    pub test_size: f64,
    pub seed: u64,
    pub probe: ProbeConfig,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self { test_size: DEFAULT_TEST_SIZE, seed: DEFAULT_SEED, probe: ProbeConfig::default() }
    }
}

/// Held-out accuracy overall and per language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub overall: Accuracy,
    pub per_lang: BTreeMap<LangCode, Accuracy>,
}

impl ProbeReport {
    /// Flattened rows: `overall` first, then languages in order.
    pub fn rows(&self, model: &ModelId) -> Vec<AccuracyRow> {
        std::iter::once(AccuracyRow { model: model.clone(), lang: OVERALL.to_string(), accuracy: self.overall })
            .chain(self.per_lang.iter().map(|(lang, &accuracy)| AccuracyRow {
                model: model.clone(),
                lang: lang.to_string(),
                accuracy,
            }))
            .collect()
    }
}

/// Trains logistic regression on model embeddings and scores a held-out split.
pub struct LinearProbe<'a> {
    embedder: &'a dyn Embedder,
    settings: ProbeSettings,
}

impl<'a> LinearProbe<'a> {
    pub fn new(embedder: &'a dyn Embedder, settings: ProbeSettings) -> Self {
        Self { embedder, settings }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Trains once and reports overall plus per-language held-out accuracy.
    pub fn overall_and_per_lang(&self, task: ProbeTask, model: &ModelId, dataset: &Dataset) -> Result<ProbeReport> {
        let run = || -> Result<ProbeReport> {
            let (truth, predicted, test_idx) = self.fit_predict(model, dataset, task.column())?;
            let overall = accuracy(&truth, &predicted)?;
            let langs: Vec<&LangCode> = test_idx.iter().map(|&i| &dataset.samples()[i].lang).collect();
            let per_lang = grouped_accuracy(&truth, &predicted, &langs)?
                .into_iter()
                .map(|(lang, acc)| (lang.clone(), acc))
                .collect();
            Ok(ProbeReport { overall, per_lang })
        };
        let report = run().map_err(|e| evaluation_failed(task.name(), model, e))?;
        log::info!("{model} [{}] overall accuracy {}", task.name(), report.overall);
        Ok(report)
    }

    /// Overall held-out accuracy only.
    pub fn train_eval(&self, task: ProbeTask, model: &ModelId, dataset: &Dataset) -> Result<Accuracy> {
        self.fit_predict(model, dataset, task.column())
            .and_then(|(truth, predicted, _)| Ok(accuracy(&truth, &predicted)?))
            .map_err(|e| evaluation_failed(task.name(), model, e))
    }

    /// A separate probe per language; subsets smaller than
    /// [`MIN_PER_LANG_ROWS`] are reported as not evaluated.
    pub fn per_lang(&self, task: ProbeTask, model: &ModelId, dataset: &Dataset) -> Result<BTreeMap<LangCode, Accuracy>> {
        let mut results = BTreeMap::new();
        for lang in dataset.languages() {
            let subset = dataset.by_lang(&lang);
            let acc = if subset.len() < MIN_PER_LANG_ROWS {
                log::warn!("{model} [{lang}] only {} rows; skipping per-language probe", subset.len());
                Accuracy::not_evaluated()
            } else {
                self.train_eval(task, model, &subset)?
            };
            results.insert(lang, acc);
        }
        Ok(results)
    }

    /// Downsamples `minority` to `fraction` of its rows, then probes the
    /// resulting imbalanced dataset.
    pub fn simulate_imbalance(
        &self,
        task: ProbeTask,
        model: &ModelId,
        dataset: &Dataset,
        minority: &str,
        fraction: f64,
    ) -> Result<Accuracy> {
        let imbalanced = sampling::downsample_minority(dataset, minority, fraction, self.settings.seed)
            .map_err(|e| evaluation_failed("imbalance", model, e))?;
        log::info!("{model} imbalance: minority={minority} fraction={fraction} rows={}", imbalanced.len());
        self.train_eval(task, model, &imbalanced)
    }

    /// Embeds, splits, trains and predicts. Returns test truth, test
    /// predictions and the dataset indices of the test rows.
    fn fit_predict(
        &self,
        model: &ModelId,
        dataset: &Dataset,
        column: LabelColumn,
    ) -> Result<(Vec<String>, Vec<String>, Vec<usize>)> {
        let features = self.embedder.embed(model, &dataset.texts())?;
        if features.len() != dataset.len() {
            return Err(DomainError::DimensionMismatch { expected: dataset.len(), actual: features.len() }.into());
        }
        let targets = dataset.targets(column);
        let split = sampling::stratified_split(&targets, self.settings.test_size, self.settings.seed)?;

        let train_x: Vec<Vec<f32>> = split.train.iter().map(|&i| features[i].clone()).collect();
        let train_y: Vec<&str> = split.train.iter().map(|&i| targets[i]).collect();
        let classifier = LogisticRegression::fit(&train_x, &train_y, &self.settings.probe)?;

        let test_x: Vec<Vec<f32>> = split.test.iter().map(|&i| features[i].clone()).collect();
        let predicted = classifier.predict(&test_x)?;
        let truth = split.test.iter().map(|&i| targets[i].to_string()).collect();
        Ok((truth, predicted, split.test))
    }
}

fn evaluation_failed(task: &str, model: &ModelId, source: impl Into<EvalError>) -> EvalError {
    let source = source.into();
    ApplicationError::EvaluationFailed {
        task: task.to_string(),
        model: model.to_string(),
        reason: source.to_string(),
        source: Some(Box::new(source)),
    }
    .into()
}
