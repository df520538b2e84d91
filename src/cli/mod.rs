mod args;
mod parsers;
mod value_enum;

pub use args::{Args, Command, GlobalOptions, ModelOptions};
use clap::Parser;
use indic_eval_shared_kernel::{LangCode, ModelId, PresentationError, PresentationResult, Result};

use crate::config::{self, Config, ConfigBuilder, Task};

fn invalid(flag: &str, value: &str, reason: &str) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.to_string() }
}

fn validate_models(models: &[String]) -> PresentationResult<Vec<ModelId>> {
    models
        .iter()
        .map(|m| {
            let trimmed = m.trim();
            if trimmed.is_empty() {
                Err(invalid("--models", m, "model identifier must not be empty"))
            } else {
                Ok(ModelId::from(trimmed))
            }
        })
        .collect()
}

fn validate_lang(flag: &str, lang: &str) -> PresentationResult<LangCode> {
    let trimmed = lang.trim();
    if trimmed.is_empty() {
        return Err(invalid(flag, lang, "language code must not be empty"));
    }
    Ok(LangCode::from(trimmed))
}

/// Split the subcommand into its task and, where it takes them, its models.
fn resolve_command(command: &Command) -> Result<(Task, Option<Vec<ModelId>>)> {
    Ok(match command {
        Command::Tokenization(m) => (Task::Tokenization, Some(validate_models(&m.models)?)),
        Command::Lid(m) => (Task::Lid, Some(validate_models(&m.models)?)),
        Command::News { models, within_language } => {
            (Task::News { within_language: *within_language }, Some(validate_models(&models.models)?))
        }
        Command::RunAll(m) => (Task::RunAll, Some(validate_models(&m.models)?)),
        Command::Imbalance { models, minority, minority_frac } => (
            Task::Imbalance { minority: validate_lang("--minority", minority)?, fraction: *minority_frac },
            Some(validate_models(&models.models)?),
        ),
        Command::Smoke { limit, format } => (Task::Smoke { limit: *limit, format: (*format).into() }, None),
        Command::Detect { texts, format } => (Task::Detect { texts: texts.clone(), format: (*format).into() }, None),
        Command::Gallery { sort, format, export, to } => (
            Task::Gallery {
                sort: (*sort).into(),
                format: (*format).into(),
                export: export.clone().zip(to.clone()),
            },
            None,
        ),
    })
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a configuration.
///
/// # Errors
///
/// Returns `Err` when a model identifier or language code is empty.
pub fn build_config(args: &Args) -> Result<Config> {
    let (task, models) = resolve_command(&args.command)?;
    let g = &args.global;

    let mut builder = ConfigBuilder::default();
    builder
        .task(task)
        .data_dir(g.data_dir.clone())
        .out_dir(g.out_dir.clone())
        .models_dir(g.models_dir.clone())
        .seed(g.seed)
        .log_level(config::log_level(g.verbose, g.quiet));
    if let Some(models) = models {
        builder.models(models);
    }
    builder.build().map_err(|e| invalid("<config>", "", &e.to_string()).into())
}
