use std::sync::Arc;

use anyhow::{Context, Result};
use indic_eval_domain::{Dataset, classify_dominant_script, is_multi_script};
use indic_eval_infra::{
    CsvDatasetSource, FsReportSink, Gallery, HfTokenizerProvider, SvgChartRenderer, TokenHashEmbedder,
};
use indic_eval_ports::dataset::DatasetSource;
use indic_eval_usecase::{AnalyzeTokenization, ImbalanceRow, LinearProbe, ProbeTask, RunAll, smoke};

use crate::{
    config::{Config, Task},
    presentation::{self, Detection},
};

/// File adapters resolved from the configured directories.
struct Adapters {
    datasets: CsvDatasetSource,
    tokenizers: Arc<HfTokenizerProvider>,
    embedder: TokenHashEmbedder,
}

impl Adapters {
    fn new(config: &Config) -> Self {
        let tokenizers = Arc::new(HfTokenizerProvider::new(&config.models_dir));
        let embedder = TokenHashEmbedder::new(tokenizers.clone());
        Self { datasets: CsvDatasetSource::new(&config.data_dir), tokenizers, embedder }
    }

    fn dataset(&self, task: ProbeTask) -> Result<Dataset> {
        let name = task.dataset();
        self.datasets
            .load(name)
            .with_context(|| format!("loading {}", self.datasets.data_dir().join(name).display()))
    }
}

/// Execute the configured task, printing its report to stdout.
///
/// # Errors
///
/// Returns `Err` when a dataset, tokenizer or output file cannot be read or
/// written, or when an evaluation cannot be trained.
pub fn run(config: &Config) -> Result<()> {
    log::debug!("running {:?}", config.task);
    match &config.task {
        Task::Detect { texts, format } => {
            let rows: Vec<Detection<'_>> = texts
                .iter()
                .map(|text| Detection {
                    text,
                    script: classify_dominant_script(text),
                    code_mixed: is_multi_script(text),
                })
                .collect();
            print!("{}", presentation::render_detect(&rows, *format)?);
        }
        Task::Smoke { limit, format } => {
            let lid = Adapters::new(config).dataset(ProbeTask::Lid)?;
            print!("{}", presentation::render_smoke(&smoke::annotate_head(&lid, *limit), *format)?);
        }
        Task::Tokenization => {
            let adapters = Adapters::new(config);
            let lid = adapters.dataset(ProbeTask::Lid)?;
            let rows = AnalyzeTokenization::new(&*adapters.tokenizers).run(&config.models, &lid)?;
            print!("{}", presentation::render_tokenization(&rows));
        }
        Task::Lid => probe(config, ProbeTask::Lid, false)?,
        Task::News { within_language } => probe(config, ProbeTask::News, *within_language)?,
        Task::Imbalance { minority, fraction } => {
            let adapters = Adapters::new(config);
            let news = adapters.dataset(ProbeTask::News)?;
            let settings = config.run_settings();
            let linear = LinearProbe::new(&adapters.embedder, settings.probe);
            for model in &config.models {
                let overall_accuracy = linear.simulate_imbalance(ProbeTask::News, model, &news, minority, *fraction)?;
                let row = ImbalanceRow {
                    model: model.clone(),
                    overall_accuracy,
                    minority: minority.clone(),
                    fraction: *fraction,
                };
                print!("{}", presentation::render_imbalance(&row));
            }
        }
        Task::RunAll => {
            let adapters = Adapters::new(config);
            let charts = SvgChartRenderer::default();
            let reports = FsReportSink::new(&config.out_dir);
            RunAll::new(&adapters.datasets, &*adapters.tokenizers, &adapters.embedder, &charts, &reports)
                .run(&config.run_settings())?;
            println!("Run complete. Artifacts in {}/.", config.out_dir.display());
        }
        Task::Gallery { sort, format, export } => {
            let mut gallery = Gallery::new(&config.out_dir);
            if let Ok(cwd) = std::env::current_dir() {
                gallery = gallery.with_root(cwd);
            }
            if let Some((name, dest)) = export {
                let copied = gallery.export(name, dest)?;
                println!("Exported {name} to {}", copied.display());
                return Ok(());
            }
            let infos: Vec<_> = gallery.list(*sort)?.iter().map(|entry| gallery.info(entry)).collect();
            if infos.is_empty() {
                log::warn!("no images found in {}", config.out_dir.display());
            }
            let dir = config.out_dir.display().to_string();
            print!("{}", presentation::render_gallery(&dir, &infos, *format)?);
        }
    }
    Ok(())
}

fn probe(config: &Config, task: ProbeTask, within_language: bool) -> Result<()> {
    let adapters = Adapters::new(config);
    let dataset = adapters.dataset(task)?;
    let linear = LinearProbe::new(&adapters.embedder, config.run_settings().probe);
    for model in &config.models {
        let report = linear.overall_and_per_lang(task, model, &dataset)?;
        print!("{}", presentation::render_probe(task, model, &report));
        if within_language {
            let separate = linear.per_lang(task, model, &dataset)?;
            print!("{}", presentation::render_within_language(&separate));
        }
    }
    Ok(())
}
