use std::path::PathBuf;

use derive_builder::Builder;
use indic_eval_domain::sampling::DEFAULT_SEED;
use indic_eval_infra::ImageSort;
use indic_eval_shared_kernel::{LangCode, ModelId};
use indic_eval_usecase::{
    ProbeSettings, RunSettings,
    orchestrator::{DEFAULT_MINORITY, DEFAULT_MINORITY_FRACTION, DEFAULT_MODELS},
};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Command selected on the command line with its own options resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Tokenization,
    Lid,
    /// `within_language` adds a separately trained classifier per language.
    News { within_language: bool },
    Imbalance { minority: LangCode, fraction: f64 },
    Smoke { limit: usize, format: OutputFormat },
    Detect { texts: Vec<String>, format: OutputFormat },
    RunAll,
    Gallery { sort: ImageSort, format: OutputFormat, export: Option<(String, PathBuf)> },
}

/// Immutable run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub task: Task,
    #[builder(default = "DEFAULT_MODELS.iter().copied().map(ModelId::from).collect()")]
    pub models: Vec<ModelId>,
    #[builder(default = "PathBuf::from(\"data\")")]
    pub data_dir: PathBuf,
    #[builder(default = "PathBuf::from(\"outputs\")")]
    pub out_dir: PathBuf,
    #[builder(default = "PathBuf::from(\"models\")")]
    pub models_dir: PathBuf,
    #[builder(default = "DEFAULT_SEED")]
    pub seed: u64,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Settings for the probe-based use cases; imbalance options come from
    /// the task when it is `imbalance`.
    pub fn run_settings(&self) -> RunSettings {
        let (minority, fraction) = match &self.task {
            Task::Imbalance { minority, fraction } => (minority.clone(), *fraction),
            _ => (LangCode::from(DEFAULT_MINORITY), DEFAULT_MINORITY_FRACTION),
        };
        RunSettings {
            models: self.models.clone(),
            minority,
            fraction,
            probe: ProbeSettings { seed: self.seed, ..ProbeSettings::default() },
        }
    }
}

/// `-q` wins; otherwise each `-v` raises the level from `warn`.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let config = ConfigBuilder::default().task(Task::RunAll).build().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.out_dir, PathBuf::from("outputs"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.models.len(), 3);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn builder_requires_task() {
        assert!(ConfigBuilder::default().build().is_err());
    }

    #[test]
    fn run_settings_follow_task_and_seed() {
        let config = ConfigBuilder::default()
            .task(Task::Imbalance { minority: LangCode::from("ta"), fraction: 0.5 })
            .seed(7u64)
            .build()
            .unwrap();
        let settings = config.run_settings();
        assert_eq!(settings.minority.as_str(), "ta");
        assert_eq!(settings.fraction, 0.5);
        assert_eq!(settings.probe.seed, 7);

        let defaults = ConfigBuilder::default().task(Task::Lid).build().unwrap().run_settings();
        assert_eq!(defaults.minority.as_str(), "hi");
        assert_eq!(defaults.fraction, 0.3);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(5, false), LevelFilter::Trace);
        assert_eq!(log_level(0, true), LevelFilter::Error);
    }
}
