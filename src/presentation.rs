use std::{collections::BTreeMap, fmt::Write};

use indic_eval_infra::gallery::ImageInfo;
use indic_eval_shared_kernel::{Accuracy, LangCode, ModelId};
use indic_eval_usecase::{ImbalanceRow, ProbeReport, ProbeTask, ScriptAnnotation, TokenizationRow};
use serde::Serialize;

use crate::config::OutputFormat;

/// Script detection result for a text given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection<'a> {
    pub text: &'a str,
    pub script: Option<&'static str>,
    pub code_mixed: bool,
}

pub fn render_tokenization(rows: &[TokenizationRow]) -> String {
    let mut out = String::from("Tokenization analysis:\n");
    let mut current: Option<&ModelId> = None;
    for row in rows {
        if current != Some(&row.model) {
            let _ = writeln!(out, "\nModel: {}", row.model);
            current = Some(&row.model);
        }
        let _ = writeln!(out, "  {}: avg_tokens={:.2}, unk_rate={:.4}", row.lang, row.avg_tokens, row.unk_rate);
    }
    out
}

pub fn render_probe(task: ProbeTask, model: &ModelId, report: &ProbeReport) -> String {
    let label = match task {
        ProbeTask::Lid => "LID",
        ProbeTask::News => "News Classification",
    };
    let mut out = String::new();
    let _ = writeln!(out, "\nModel: {model} ({label})");
    let _ = writeln!(out, "  overall: acc={}", report.overall);
    for (lang, acc) in &report.per_lang {
        let _ = writeln!(out, "  {lang}: acc={acc}");
    }
    out
}

/// Accuracy of classifiers trained and scored inside a single language.
pub fn render_within_language(results: &BTreeMap<LangCode, Accuracy>) -> String {
    let mut out = String::from("  within-language accuracy:\n");
    for (lang, acc) in results {
        let _ = writeln!(out, "    {lang}: acc={acc}");
    }
    out
}

pub fn render_imbalance(row: &ImbalanceRow) -> String {
    format!(
        "\nModel: {} (Imbalance: minority={}, frac={})\n  overall_acc={}\n",
        row.model, row.minority, row.fraction, row.overall_accuracy
    )
}

pub fn render_smoke(rows: &[ScriptAnnotation], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Table => {
            let mut out = String::from("Script detection smoke test:\n");
            for row in rows {
                let _ = writeln!(
                    out,
                    "  [{}] -> script={}, code_mixed={} | {}",
                    row.lang,
                    row.script.unwrap_or("none"),
                    row.code_mixed,
                    row.preview
                );
            }
            Ok(out)
        }
    }
}

pub fn render_detect(rows: &[Detection<'_>], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json(rows),
        OutputFormat::Table => Ok(rows.iter().fold(String::new(), |mut out, row| {
            let _ = writeln!(
                out,
                "script={}, code_mixed={} | {}",
                row.script.unwrap_or("none"),
                row.code_mixed,
                row.text
            );
            out
        })),
    }
}

pub fn render_gallery(dir: &str, images: &[ImageInfo], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json(images),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "indic_eval v{} · {} image(s) in {dir}", crate::VERSION, images.len());
            let _ = writeln!(out);
            let _ = writeln!(out, "   SIZE_KB   DIMENSIONS  FILE");
            let _ = writeln!(out, "------------------------------------");
            for image in images {
                let dims = match (image.width, image.height) {
                    (Some(w), Some(h)) => format!("{w}x{h}"),
                    _ => "-".to_string(),
                };
                let _ = writeln!(out, "{:>10.2}  {dims:>11}  {}", image.size_kb, image.path);
            }
            Ok(out)
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut s = serde_json::to_string_pretty(value)?;
    s.push('\n');
    Ok(s)
}
