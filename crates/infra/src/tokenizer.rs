//! Hugging Face `tokenizer.json` support.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use indic_eval_ports::tokenizer::{Tokenizer, TokenizerProvider};
use indic_eval_shared_kernel::{InfrastructureError, ModelId, Result};
use tokenizers::EncodeInput;

pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Unknown-token spellings used by the common vocabularies, in lookup order.
const UNK_CANDIDATES: [&str; 3] = ["[UNK]", "<unk>", "<UNK>"];

pub struct HfTokenizer {
    model: ModelId,
    inner: tokenizers::Tokenizer,
    unk: Option<String>,
}

impl HfTokenizer {
    pub fn from_file(model: ModelId, path: &Path) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| InfrastructureError::TokenizerLoad {
            model: model.to_string(),
            details: format!("{}: {e}", path.display()),
        })?;
        let unk = UNK_CANDIDATES.iter().find(|t| inner.token_to_id(t).is_some()).map(|t| (*t).to_string());
        log::debug!("{model}: vocab size {}, unk token {unk:?}", inner.get_vocab_size(true));
        Ok(Self { model, inner, unk })
    }
}

impl Tokenizer for HfTokenizer {
    fn model(&self) -> &ModelId {
        &self.model
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self.inner.encode(EncodeInput::Single(text.into()), false).map_err(|e| {
            InfrastructureError::Tokenize { model: self.model.to_string(), details: e.to_string() }
        })?;
        Ok(encoding.get_tokens().to_vec())
    }

    fn unk_token(&self) -> Option<&str> {
        self.unk.as_deref()
    }
}

/// Resolves models to `<models_dir>/<model id>/tokenizer.json`, falling back
/// to the flattened `<models_dir>/<org>__<name>/tokenizer.json` layout.
///
/// Each tokenizer is loaded once and shared afterwards.
pub struct HfTokenizerProvider {
    models_dir: PathBuf,
    cache: Mutex<HashMap<ModelId, Arc<dyn Tokenizer>>>,
}

impl HfTokenizerProvider {
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self { models_dir: models_dir.into(), cache: Mutex::new(HashMap::new()) }
    }

    pub fn tokenizer_path(&self, model: &ModelId) -> PathBuf {
        let nested = self.models_dir.join(model.as_str()).join(TOKENIZER_FILE);
        if nested.is_file() {
            return nested;
        }
        let flat = self.models_dir.join(model.file_stem()).join(TOKENIZER_FILE);
        if flat.is_file() { flat } else { nested }
    }
}

impl TokenizerProvider for HfTokenizerProvider {
    fn load(&self, model: &ModelId) -> Result<Arc<dyn Tokenizer>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tokenizer) = cache.get(model) {
            return Ok(Arc::clone(tokenizer));
        }
        let path = self.tokenizer_path(model);
        log::info!("loading tokenizer for {model} from {}", path.display());
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(HfTokenizer::from_file(model.clone(), &path)?);
        cache.insert(model.clone(), Arc::clone(&tokenizer));
        Ok(tokenizer)
    }
}
