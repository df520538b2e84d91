use indic_eval_domain::{Dataset, classify_dominant_script, is_multi_script};
use indic_eval_shared_kernel::LangCode;

use crate::dto::ScriptAnnotation;

/// Rows annotated by the `smoke` command when no limit is given.
pub const DEFAULT_SMOKE_ROWS: usize = 9;
/// Characters of the source text kept in an annotation.
pub const PREVIEW_CHARS: usize = 40;

/// Annotates the first `limit` rows of `dataset` with script diagnostics.
pub fn annotate_head(dataset: &Dataset, limit: usize) -> Vec<ScriptAnnotation> {
    dataset.head(limit).iter().map(|s| annotate(s.lang.clone(), &s.text)).collect()
}

pub fn annotate(lang: LangCode, text: &str) -> ScriptAnnotation {
    ScriptAnnotation {
        lang,
        script: classify_dominant_script(text),
        code_mixed: is_multi_script(text),
        preview: text.chars().take(PREVIEW_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use indic_eval_domain::Sample;

    use super::*;

    #[test]
    fn annotates_requested_head() {
        let dataset = Dataset::new(vec![
            Sample::new("नमस्ते", "hi", ""),
            Sample::new("hello world", "en", ""),
            Sample::new("नमस्ते বাংলা", "hi", ""),
        ]);
        let rows = annotate_head(&dataset, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].script, Some("hi"));
        assert!(!rows[0].code_mixed);
        assert_eq!(rows[1].script, None);

        let all = annotate_head(&dataset, DEFAULT_SMOKE_ROWS);
        assert_eq!(all.len(), 3);
        assert!(all[2].code_mixed);
    }

    #[test]
    fn preview_is_truncated_by_characters() {
        let text = "क".repeat(50);
        let row = annotate(LangCode::from("hi"), &text);
        assert_eq!(row.preview.chars().count(), PREVIEW_CHARS);
    }
}
