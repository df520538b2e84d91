use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

use super::fixtures::{LID_CSV, NEWS_CSV, TOKENIZER_JSON};

/// Temporary `data/`, `models/` and `outputs/` layout for one test.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Workspace with both datasets and tokenizers for `models`.
    pub fn with_fixtures(models: &[&str]) -> Self {
        let ws = Self::new();
        ws.write_file("data/lid_samples.csv", LID_CSV);
        ws.write_file("data/news_samples.csv", NEWS_CSV);
        for model in models {
            ws.write_file(&format!("models/{model}/tokenizer.json"), TOKENIZER_JSON);
        }
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.path().join("outputs")
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// The binary with its working directory and all paths set to this workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_indic_eval"));
        cmd.current_dir(self.path()).env_remove("INDIC_EVAL_LOG");
        cmd.arg("--data-dir").arg(self.path().join("data"));
        cmd.arg("--models-dir").arg(self.path().join("models"));
        cmd.arg("--out-dir").arg(self.out_dir());
        cmd
    }
}
