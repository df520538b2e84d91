use clap::ValueEnum;
use indic_eval_infra::ImageSort;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliImageSort {
    Name,
    Size,
    Modified,
}

impl From<CliImageSort> for ImageSort {
    fn from(value: CliImageSort) -> Self {
        match value {
            CliImageSort::Name => ImageSort::Name,
            CliImageSort::Size => ImageSort::Size,
            CliImageSort::Modified => ImageSort::Modified,
        }
    }
}
