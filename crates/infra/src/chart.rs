//! Bar charts rendered as standalone SVG documents.

use std::{collections::BTreeSet, fmt::Write as _, path::Path};

use indic_eval_ports::chart::{ChartRenderer, GroupedBarChart, SingleBarChart};
use indic_eval_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;

/// Renders [`GroupedBarChart`]s and [`SingleBarChart`]s to SVG files.
#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    width: f64,
    height: f64,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self { width: 800.0, height: 500.0 }
    }
}

/// Bars of one series laid out inside the plot area.
struct Series<'a> {
    name: &'a str,
    values: Vec<Option<f64>>,
}

impl SvgChartRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Groups are sorted by `x`, series by `hue`. A bar is the mean of every
    /// finite value for its `(x, hue)`; bars with no such value are omitted.
    pub fn grouped_svg(&self, chart: &GroupedBarChart) -> String {
        let categories: Vec<&str> =
            chart.bars.iter().map(|b| b.x.as_str()).collect::<BTreeSet<_>>().into_iter().collect();
        let hues: Vec<&str> = chart.bars.iter().map(|b| b.hue.as_str()).collect::<BTreeSet<_>>().into_iter().collect();
        let series: Vec<Series<'_>> = hues
            .iter()
            .map(|&hue| Series {
                name: hue,
                values: categories
                    .iter()
                    .map(|&x| {
                        mean(chart.bars.iter().filter(|b| b.x == x && b.hue == hue).map(|b| b.value))
                    })
                    .collect(),
            })
            .collect();
        self.render(&chart.title, &chart.ylabel, &categories, &series, true)
    }

    /// One bar per entry, in the given order.
    pub fn single_svg(&self, chart: &SingleBarChart) -> String {
        let categories: Vec<&str> = chart.bars.iter().map(|(x, _)| x.as_str()).collect();
        let series = [Series {
            name: "",
            values: chart.bars.iter().map(|&(_, v)| v.is_finite().then_some(v)).collect(),
        }];
        self.render(&chart.title, &chart.ylabel, &categories, &series, false)
    }

    fn render(&self, title: &str, ylabel: &str, categories: &[&str], series: &[Series<'_>], legend: bool) -> String {
        let plot_w = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let y_max = nice_max(series.iter().flat_map(|s| s.values.iter().flatten().copied()).fold(0.0, f64::max));
        let y_of = |v: f64| MARGIN_TOP + plot_h - (v.max(0.0) / y_max) * plot_h;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
            self.width / 2.0,
            escape(title)
        );
        let _ = writeln!(
            svg,
            r#"<text transform="translate(18,{:.1}) rotate(-90)" text-anchor="middle" font-size="12">{}</text>"#,
            MARGIN_TOP + plot_h / 2.0,
            escape(ylabel)
        );

        for tick in 0..=Y_TICKS {
            #[allow(clippy::cast_precision_loss)]
            let v = y_max * tick as f64 / Y_TICKS as f64;
            let y = y_of(v);
            let _ = writeln!(
                svg,
                r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
                MARGIN_LEFT + plot_w
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="10">{}</text>"#,
                MARGIN_LEFT - 6.0,
                y + 3.0,
                format_tick(v)
            );
        }

        if !categories.is_empty() && !series.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let slot = plot_w / categories.len() as f64;
            #[allow(clippy::cast_precision_loss)]
            let bar_w = slot * 0.8 / series.len() as f64;
            for (ci, category) in categories.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let left = MARGIN_LEFT + slot * ci as f64 + slot * 0.1;
                for (si, s) in series.iter().enumerate() {
                    let Some(v) = s.values[ci] else { continue };
                    #[allow(clippy::cast_precision_loss)]
                    let x = left + bar_w * si as f64;
                    let y = y_of(v);
                    let _ = writeln!(
                        svg,
                        r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
                        MARGIN_TOP + plot_h - y,
                        PALETTE[si % PALETTE.len()],
                        escape(format!("{} {category}: {}", s.name, format_tick(v)).trim_start())
                    );
                }
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text>"#,
                    left + slot * 0.4,
                    MARGIN_TOP + plot_h + 18.0,
                    escape(category)
                );
            }
        }

        let _ = writeln!(
            svg,
            r#"<line x1="{MARGIN_LEFT}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
            MARGIN_TOP + plot_h,
            MARGIN_LEFT + plot_w,
            MARGIN_TOP + plot_h
        );

        if legend {
            for (si, s) in series.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let y = MARGIN_TOP + 8.0 + 18.0 * si as f64;
                let x = MARGIN_LEFT + plot_w - 190.0;
                let _ = writeln!(
                    svg,
                    r#"<rect x="{x:.1}" y="{:.1}" width="12" height="12" fill="{}"/>"#,
                    y - 10.0,
                    PALETTE[si % PALETTE.len()]
                );
                let _ = writeln!(svg, r#"<text x="{:.1}" y="{y:.1}" font-size="11">{}</text>"#, x + 18.0, escape(s.name));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn write(path: &Path, svg: &str) -> Result<()> {
        FileWriter::atomic_write(path, svg.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        log::debug!("chart written to {}", path.display());
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn grouped_bar(&self, chart: &GroupedBarChart, out_path: &Path) -> Result<()> {
        Self::write(out_path, &self.grouped_svg(chart))
    }

    fn single_bar(&self, chart: &SingleBarChart, out_path: &Path) -> Result<()> {
        Self::write(out_path, &self.single_svg(chart))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.filter(|v| v.is_finite()).fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

/// Rounds the axis maximum up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0].into_iter().find(|m| m * magnitude >= max).unwrap_or(10.0);
    step * magnitude
}

fn format_tick(v: f64) -> String {
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use indic_eval_ports::chart::GroupedBar;

    use super::*;

    fn bar(x: &str, hue: &str, value: f64) -> GroupedBar {
        GroupedBar { x: x.into(), hue: hue.into(), value }
    }

    fn chart(bars: Vec<GroupedBar>) -> GroupedBarChart {
        GroupedBarChart { title: "LID accuracy".into(), ylabel: "Accuracy".into(), bars }
    }

    #[test]
    fn grouped_chart_has_bar_per_pair_and_legend() {
        let svg = SvgChartRenderer::default().grouped_svg(&chart(vec![
            bar("hi", "m2", 0.5),
            bar("bn", "m1", 1.0),
            bar("hi", "m1", 0.75),
            bar("bn", "m2", 0.25),
        ]));
        assert_eq!(svg.matches("<title>").count(), 4);
        assert!(svg.contains(">LID accuracy</text>"));
        assert!(svg.contains(">m1</text>") && svg.contains(">m2</text>"));
        // categories sorted: bn before hi
        assert!(svg.find(">bn</text>").unwrap() < svg.find(">hi</text>").unwrap());
    }

    #[test]
    fn duplicate_pairs_are_averaged_and_nan_skipped() {
        let svg = SvgChartRenderer::default().grouped_svg(&chart(vec![
            bar("hi", "m1", 0.2),
            bar("hi", "m1", 0.4),
            bar("ta", "m1", f64::NAN),
        ]));
        assert_eq!(svg.matches("<title>").count(), 1);
        assert!(svg.contains("<title>m1 hi: 0.3</title>"));
    }

    #[test]
    fn single_chart_escapes_labels() {
        let svg = SvgChartRenderer::default().single_svg(&SingleBarChart {
            title: "Imbalance overall acc (minority=hi, frac=0.3)".into(),
            ylabel: "Accuracy".into(),
            bars: vec![("a<b".into(), 0.5), ("c".into(), 0.7)],
        });
        assert!(svg.contains("a&lt;b"));
        assert_eq!(svg.matches("<title>").count(), 2);
        assert!(svg.contains("<title>c: 0.7</title>"));
    }

    #[test]
    fn axis_maximum_is_rounded_up() {
        assert_eq!(nice_max(0.83), 1.0);
        assert_eq!(nice_max(12.3), 20.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(2.0), "2");
    }

    #[test]
    fn renderer_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/chart.svg");
        SvgChartRenderer::default().grouped_bar(&chart(vec![bar("hi", "m1", 1.0)]), &path).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().starts_with("<svg"));
    }
}
