use indic_eval_ports::{
    chart::{ChartRenderer, GroupedBar, GroupedBarChart, SingleBarChart},
    dataset::DatasetSource,
    embedding::Embedder,
    report::ReportSink,
    tokenizer::TokenizerProvider,
};
use indic_eval_shared_kernel::{ErrorContext, LangCode, ModelId, Result};

use crate::{
    dto::{AccuracyRow, ImbalanceRow, Summary, TokenizationRow, to_table},
    probe::{LinearProbe, ProbeSettings, ProbeTask},
    tokenization::AnalyzeTokenization,
};

/// Models evaluated when none are given.
pub const DEFAULT_MODELS: [&str; 3] = ["bert-base-multilingual-cased", "xlm-roberta-base", "google/muril-base-cased"];
pub const DEFAULT_MINORITY: &str = "hi";
pub const DEFAULT_MINORITY_FRACTION: f64 = 0.3;

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub models: Vec<ModelId>,
    pub minority: LangCode,
    pub fraction: f64,
    pub probe: ProbeSettings,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().copied().map(ModelId::from).collect(),
            minority: LangCode::from(DEFAULT_MINORITY),
            fraction: DEFAULT_MINORITY_FRACTION,
            probe: ProbeSettings::default(),
        }
    }
}

/// Runs every evaluation and writes tables, charts and the JSON summary.
pub struct RunAll<'a> {
    datasets: &'a dyn DatasetSource,
    tokenizers: &'a dyn TokenizerProvider,
    embedder: &'a dyn Embedder,
    charts: &'a dyn ChartRenderer,
    reports: &'a dyn ReportSink,
}

impl<'a> RunAll<'a> {
    pub fn new(
        datasets: &'a dyn DatasetSource,
        tokenizers: &'a dyn TokenizerProvider,
        embedder: &'a dyn Embedder,
        charts: &'a dyn ChartRenderer,
        reports: &'a dyn ReportSink,
    ) -> Self {
        Self { datasets, tokenizers, embedder, charts, reports }
    }

    pub fn run(&self, settings: &RunSettings) -> Result<Summary> {
        let summary = Summary {
            tokenization: self.tokenization(&settings.models)?,
            lid: self.probe_task(ProbeTask::Lid, settings)?,
            news: self.probe_task(ProbeTask::News, settings)?,
            imbalance: self.imbalance(settings)?,
        };
        let value = serde_json::to_value(&summary)?;
        let path = self.reports.write_json(SUMMARY_FILE, &value)?;
        log::info!("wrote {}", path.display());
        Ok(summary)
    }

    /// `tokenization_stats.csv` plus the average-token and UNK-rate charts.
    pub fn tokenization(&self, models: &[ModelId]) -> Result<Vec<TokenizationRow>> {
        let lid = self.datasets.load(ProbeTask::Lid.dataset())?;
        let rows = AnalyzeTokenization::new(self.tokenizers).run(models, &lid)?;
        self.reports.write_table("tokenization_stats.csv", &to_table(&rows))?;

        let bars = |value: fn(&TokenizationRow) -> f64| -> Vec<GroupedBar> {
            rows.iter()
                .map(|r| GroupedBar { x: r.lang.to_string(), hue: r.model.to_string(), value: value(r) })
                .collect()
        };
        self.grouped(
            GroupedBarChart {
                title: "Avg tokens per text".to_string(),
                ylabel: "Avg tokens".to_string(),
                bars: bars(|r| r.avg_tokens),
            },
            "tokenization_avg_tokens.svg",
        )?;
        self.grouped(
            GroupedBarChart { title: "UNK rate".to_string(), ylabel: "UNK rate".to_string(), bars: bars(|r| r.unk_rate) },
            "tokenization_unk_rate.svg",
        )?;
        Ok(rows)
    }

    /// `<task>_accuracy.csv` and chart with an `overall` row per model.
    pub fn probe_task(&self, task: ProbeTask, settings: &RunSettings) -> Result<Vec<AccuracyRow>> {
        let dataset = self.datasets.load(task.dataset())?;
        log::info!(
            "{}: {} rows, {} languages, {} labels",
            task.dataset(),
            dataset.len(),
            dataset.languages().len(),
            dataset.labels().len()
        );
        let probe = LinearProbe::new(self.embedder, settings.probe);
        let mut rows = Vec::new();
        for model in &settings.models {
            rows.extend(probe.overall_and_per_lang(task, model, &dataset)?.rows(model));
        }

        let name = format!("{}_accuracy", task.name());
        self.reports.write_table(&format!("{name}.csv"), &to_table(&rows))?;
        let title = match task {
            ProbeTask::Lid => "LID accuracy",
            ProbeTask::News => "News classification accuracy",
        };
        self.grouped(
            GroupedBarChart {
                title: title.to_string(),
                ylabel: "Accuracy".to_string(),
                bars: rows
                    .iter()
                    .map(|r| GroupedBar { x: r.lang.clone(), hue: r.model.to_string(), value: r.accuracy.value() })
                    .collect(),
            },
            &format!("{name}.svg"),
        )?;
        Ok(rows)
    }

    /// `imbalance_overall.csv` and a one-bar-per-model chart.
    pub fn imbalance(&self, settings: &RunSettings) -> Result<Vec<ImbalanceRow>> {
        let news = self.datasets.load(ProbeTask::News.dataset())?;
        let probe = LinearProbe::new(self.embedder, settings.probe);
        let rows = settings
            .models
            .iter()
            .map(|model| {
                let overall_accuracy =
                    probe.simulate_imbalance(ProbeTask::News, model, &news, &settings.minority, settings.fraction)?;
                Ok(ImbalanceRow {
                    model: model.clone(),
                    overall_accuracy,
                    minority: settings.minority.clone(),
                    fraction: settings.fraction,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.reports.write_table("imbalance_overall.csv", &to_table(&rows))?;
        let chart = SingleBarChart {
            title: format!("Imbalance overall acc (minority={}, frac={})", settings.minority, settings.fraction),
            ylabel: "Accuracy".to_string(),
            bars: rows.iter().map(|r| (r.model.to_string(), r.overall_accuracy.value())).collect(),
        };
        let path = self.reports.resolve("imbalance_overall.svg");
        self.charts.single_bar(&chart, &path).with_context(|| format!("rendering {}", path.display()))?;
        Ok(rows)
    }

    fn grouped(&self, chart: GroupedBarChart, name: &str) -> Result<()> {
        let path = self.reports.resolve(name);
        self.charts.grouped_bar(&chart, &path).with_context(|| format!("rendering {}", path.display()))
    }
}
