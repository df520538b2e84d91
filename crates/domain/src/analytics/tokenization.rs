use indic_eval_shared_kernel::TokenCount;
use serde::{Deserialize, Serialize};

/// Tokenizer efficiency over a batch of texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenizationStats {
    pub avg_tokens: f64,
    pub unk_rate: f64,
}

/// Running totals used to build [`TokenizationStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizationTally {
    texts: usize,
    tokens: TokenCount,
    unknown: TokenCount,
}

impl TokenizationTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the tokens of one text. A token is unknown only when it equals
    /// `unk_token` exactly.
    pub fn record<S: AsRef<str>>(&mut self, tokens: &[S], unk_token: Option<&str>) {
        self.texts += 1;
        self.tokens += tokens.len();
        if let Some(unk) = unk_token {
            self.unknown += tokens.iter().filter(|t| t.as_ref() == unk).count();
        }
    }

    pub const fn texts(&self) -> usize {
        self.texts
    }

    pub const fn tokens(&self) -> TokenCount {
        self.tokens
    }

    pub const fn unknown(&self) -> TokenCount {
        self.unknown
    }

    /// `avg_tokens = tokens / max(texts, 1)`, `unk_rate = unknown / max(tokens, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn finish(&self) -> TokenizationStats {
        let avg_tokens = self.tokens.value() as f64 / self.texts.max(1) as f64;
        let unk_rate = self.unknown.value() as f64 / self.tokens.value().max(1) as f64;
        TokenizationStats { avg_tokens, unk_rate }
    }
}
