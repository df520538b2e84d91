use indic_eval_domain::{
    Dataset,
    analytics::{TokenizationStats, TokenizationTally},
};
use indic_eval_ports::tokenizer::{Tokenizer, TokenizerProvider};
use indic_eval_shared_kernel::{ErrorContext, ModelId, Result};

use crate::dto::TokenizationRow;

/// Tokenizer efficiency per model and language.
pub struct AnalyzeTokenization<'a> {
    tokenizers: &'a dyn TokenizerProvider,
}

impl<'a> AnalyzeTokenization<'a> {
    pub fn new(tokenizers: &'a dyn TokenizerProvider) -> Self {
        Self { tokenizers }
    }

    /// One row per model and language, languages in sorted order.
    pub fn run(&self, models: &[ModelId], dataset: &Dataset) -> Result<Vec<TokenizationRow>> {
        let languages = dataset.languages();
        let mut rows = Vec::with_capacity(models.len() * languages.len());

        for model in models {
            let tokenizer =
                self.tokenizers.load(model).with_context(|| format!("loading tokenizer for '{model}'"))?;
            for lang in &languages {
                let subset = dataset.by_lang(lang);
                let stats = analyze(tokenizer.as_ref(), &subset.texts())?;
                log::info!("{model} [{lang}] avg_tokens={:.2} unk_rate={:.4}", stats.avg_tokens, stats.unk_rate);
                rows.push(TokenizationRow {
                    model: model.clone(),
                    lang: lang.clone(),
                    avg_tokens: stats.avg_tokens,
                    unk_rate: stats.unk_rate,
                });
            }
        }

        Ok(rows)
    }
}

/// Average token count and unknown-token rate of `tokenizer` over `texts`.
pub fn analyze(tokenizer: &dyn Tokenizer, texts: &[&str]) -> Result<TokenizationStats> {
    let unk = tokenizer.unk_token();
    let mut tally = TokenizationTally::new();
    for text in texts {
        let tokens = tokenizer.tokenize(text)?;
        tally.record(&tokens, unk);
    }
    Ok(tally.finish())
}
