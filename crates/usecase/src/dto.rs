//! Report rows exchanged between the use cases and the presentation layer.

use indic_eval_ports::report::Table;
use indic_eval_shared_kernel::{Accuracy, LangCode, ModelId};
use serde::Serialize;

/// Row type that can be rendered as one line of a CSV table.
pub trait TabularRow {
    fn header() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

/// Builds a [`Table`] from rows of one type.
pub fn to_table<R: TabularRow>(rows: &[R]) -> Table {
    Table {
        header: R::header().iter().map(ToString::to_string).collect(),
        rows: rows.iter().map(TabularRow::record).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenizationRow {
    pub model: ModelId,
    pub lang: LangCode,
    pub avg_tokens: f64,
    pub unk_rate: f64,
}

impl TabularRow for TokenizationRow {
    fn header() -> &'static [&'static str] {
        &["model", "lang", "avg_tokens", "unk_rate"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.model.to_string(),
            self.lang.to_string(),
            self.avg_tokens.to_string(),
            self.unk_rate.to_string(),
        ]
    }
}

/// Label used for the all-languages accuracy row.
pub const OVERALL: &str = "overall";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyRow {
    pub model: ModelId,
    /// A language code, or [`OVERALL`].
    pub lang: String,
    pub accuracy: Accuracy,
}

impl TabularRow for AccuracyRow {
    fn header() -> &'static [&'static str] {
        &["model", "lang", "accuracy"]
    }

    fn record(&self) -> Vec<String> {
        vec![self.model.to_string(), self.lang.clone(), csv_float(self.accuracy.value())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImbalanceRow {
    pub model: ModelId,
    pub overall_accuracy: Accuracy,
    pub minority: LangCode,
    pub fraction: f64,
}

impl TabularRow for ImbalanceRow {
    fn header() -> &'static [&'static str] {
        &["model", "overall_accuracy", "minority", "fraction"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.model.to_string(),
            csv_float(self.overall_accuracy.value()),
            self.minority.to_string(),
            self.fraction.to_string(),
        ]
    }
}

/// Script detection result for one dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptAnnotation {
    pub lang: LangCode,
    pub script: Option<&'static str>,
    pub code_mixed: bool,
    pub preview: String,
}

/// Everything produced by a full run, as written to `summary.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub tokenization: Vec<TokenizationRow>,
    pub lid: Vec<AccuracyRow>,
    pub news: Vec<AccuracyRow>,
    pub imbalance: Vec<ImbalanceRow>,
}

/// NaN is written as an empty cell.
fn csv_float(value: f64) -> String {
    if value.is_nan() { String::new() } else { value.to_string() }
}
