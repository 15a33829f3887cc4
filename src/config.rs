//! Application configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FORGE_SEED` | random |
//! | `FORGE_BEST_SCORE_PATH` | `$HOME/.forge-2048/best_score.json` |
//! | `FORGE_AUDIO_DISABLED` | `false` |
//! | `FORGE_LOG_PATH` | unset (logging off) |
//! | `FORGE_LOG` | `info` |
//! | `FORGE_SWIPE_THRESHOLD` | `2` terminal cells |
//!
//! Malformed values fall back to the default.

use std::path::PathBuf;

/// Mouse drags are measured in terminal cells, far coarser than pixels.
pub const TERMINAL_SWIPE_THRESHOLD: i32 = 2;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Spawn RNG seed; `None` draws a fresh one
    pub seed: Option<u64>,
    pub best_score_path: PathBuf,
    pub audio_enabled: bool,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub swipe_threshold: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            best_score_path: default_best_score_path(std::env::var("HOME").ok()),
            audio_enabled: true,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            swipe_threshold: TERMINAL_SWIPE_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (testable without touching
    /// the process environment)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("FORGE_SEED").and_then(|s| s.parse().ok());

        let best_score_path = non_empty("FORGE_BEST_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_best_score_path(lookup("HOME")));

        let audio_enabled = !non_empty("FORGE_AUDIO_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = non_empty("FORGE_LOG_PATH").map(PathBuf::from);

        let log_filter =
            non_empty("FORGE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let swipe_threshold = non_empty("FORGE_SWIPE_THRESHOLD")
            .and_then(|s| s.parse::<i32>().ok())
            .filter(|t| *t >= 0)
            .unwrap_or(TERMINAL_SWIPE_THRESHOLD);

        Self {
            seed,
            best_score_path,
            audio_enabled,
            log_path,
            log_filter,
            swipe_threshold,
        }
    }
}

fn default_best_score_path(home: Option<String>) -> PathBuf {
    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(".forge-2048").join("best_score.json"),
        None => PathBuf::from("forge-2048-best.json"),
    }
}
