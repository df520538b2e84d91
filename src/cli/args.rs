use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use indic_eval_usecase::{
    orchestrator::{DEFAULT_MINORITY, DEFAULT_MODELS},
    smoke::DEFAULT_SMOKE_ROWS,
};

use super::{
    parsers,
    value_enum::{CliImageSort, CliOutputFormat},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "indic_eval",
    version = crate::VERSION,
    about = "Tokenizer, LID and classification evaluation for Indic scripts"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(ClapArgs, Debug)]
pub struct GlobalOptions {
    /// Directory holding lid_samples.csv and news_samples.csv
    #[arg(long, global = true, default_value = "data", value_hint = ValueHint::DirPath, help_heading = "Paths")]
    pub data_dir: PathBuf,

    /// Directory receiving reports and charts
    #[arg(long, global = true, default_value = "outputs", value_hint = ValueHint::DirPath, help_heading = "Paths")]
    pub out_dir: PathBuf,

    /// Directory with one <model>/tokenizer.json per model
    #[arg(long, global = true, default_value = "models", value_hint = ValueHint::DirPath, help_heading = "Paths")]
    pub models_dir: PathBuf,

    /// Seed for splits and downsampling
    #[arg(long, global = true, default_value_t = 42, help_heading = "Evaluation")]
    pub seed: u64,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, help_heading = "Logging")]
    pub quiet: bool,
}

/// Models to evaluate.
#[derive(ClapArgs, Debug, Clone)]
pub struct ModelOptions {
    /// Model identifiers (Hugging Face style)
    #[arg(long, num_args = 1.., default_values = DEFAULT_MODELS)]
    pub models: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Average tokens per text and UNK rate per model and language
    Tokenization(ModelOptions),
    /// Language identification accuracy of a linear probe
    Lid(ModelOptions),
    /// News classification accuracy of a linear probe
    News {
        #[command(flatten)]
        models: ModelOptions,

        /// Also train and score a separate classifier inside each language
        #[arg(long)]
        within_language: bool,
    },
    /// News accuracy after downsampling one language
    Imbalance {
        #[command(flatten)]
        models: ModelOptions,

        /// Language to downsample
        #[arg(long, default_value = DEFAULT_MINORITY)]
        minority: String,

        /// Share of minority rows kept, in (0, 1]
        #[arg(long, default_value = "0.3", value_parser = parsers::parse_fraction)]
        minority_frac: f64,
    },
    /// Script detection over the first rows of the LID dataset
    Smoke {
        /// Rows to annotate
        #[arg(long, default_value_t = DEFAULT_SMOKE_ROWS, value_parser = parsers::parse_positive_usize)]
        limit: usize,

        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,
    },
    /// Dominant script and code-mixing of the given texts
    Detect {
        #[arg(required = true)]
        texts: Vec<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,
    },
    /// Every evaluation, writing CSV tables, charts and summary.json
    RunAll(ModelOptions),
    /// List the images in the output directory
    Gallery {
        #[arg(long, value_enum, default_value = "name")]
        sort: CliImageSort,

        #[arg(long, value_enum, default_value = "table")]
        format: CliOutputFormat,

        /// Image to copy out of the output directory
        #[arg(long, requires = "to")]
        export: Option<String>,

        /// Destination file or directory for --export
        #[arg(long, requires = "export", value_hint = ValueHint::AnyPath)]
        to: Option<PathBuf>,
    },
}
