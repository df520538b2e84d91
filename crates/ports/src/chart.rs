// crates/ports/src/chart.rs
use std::path::Path;

use indic_eval_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// One observation of a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBar {
    pub x: String,
    pub hue: String,
    pub value: f64,
}

/// Bars grouped along `x`, one bar per `hue` within each group.
///
/// Several observations for the same `(x, hue)` are averaged by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub ylabel: String,
    pub bars: Vec<GroupedBar>,
}

/// One bar per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleBarChart {
    pub title: String,
    pub ylabel: String,
    pub bars: Vec<(String, f64)>,
}

/// Port for writing charts to image files.
pub trait ChartRenderer: Send + Sync {
    fn grouped_bar(&self, chart: &GroupedBarChart, out_path: &Path) -> Result<()>;
    fn single_bar(&self, chart: &SingleBarChart, out_path: &Path) -> Result<()>;
}
