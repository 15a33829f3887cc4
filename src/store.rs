//! Best-score persistence as a small JSON file.
//!
//! File format: `{"best_score": 1234}`. A missing file means no best score
//! yet. Read and write failures are logged and otherwise ignored; they never
//! interrupt a game.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScoreFile {
    pub best_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score; `Ok(0)` when the file does not exist
    pub fn read(&self) -> Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()))
            }
        };
        let file: BestScoreFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(file.best_score)
    }

    /// Sibling file the next write goes to before replacing `path`
    pub fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the best score, creating parent directories as needed.
    ///
    /// The file is replaced by rename, so a reader sees either the old or
    /// the new score.
    pub fn write(&self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let body = serde_json::to_string(&BestScoreFile { best_score })?;
        let staging = self.staging_path();
        fs::write(&staging, body).with_context(|| format!("write {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> u32 {
        self.read().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "best score unavailable, starting from 0");
            0
        })
    }

    fn save(&mut self, best: u32) {
        if let Err(err) = self.write(best) {
            tracing::warn!(error = %err, "failed to persist best score");
        }
    }
}
