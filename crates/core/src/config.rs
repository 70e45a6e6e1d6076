//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::types::{TICK_MS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Size of the visible window in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Directory holding `level1.json`, `level2.json`, ...
    pub level_dir: PathBuf,
    /// Trace log destination. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub viewport: ViewportSize,
    pub tick_ms: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            level_dir: PathBuf::from("levels"),
            log_path: None,
            viewport: ViewportSize::default(),
            tick_ms: TICK_MS,
        }
    }
}

impl RunnerConfig {
    /// Read configuration from environment variables:
    ///
    /// - `RUNNER_LEVEL_DIR` (default `levels`)
    /// - `RUNNER_LOG_PATH` (unset or empty disables the log file)
    /// - `RUNNER_VIEWPORT_WIDTH` / `RUNNER_VIEWPORT_HEIGHT` (default 800 / 600)
    /// - `RUNNER_TICK_MS` (default 16)
    ///
    /// Values that fail to parse, or are not positive, keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let level_dir = lookup("RUNNER_LEVEL_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.level_dir);

        let log_path = lookup("RUNNER_LOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let positive_f64 = |key: &str, fallback: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(fallback)
        };
        let viewport = ViewportSize {
            width: positive_f64("RUNNER_VIEWPORT_WIDTH", defaults.viewport.width),
            height: positive_f64("RUNNER_VIEWPORT_HEIGHT", defaults.viewport.height),
        };

        let tick_ms = lookup("RUNNER_TICK_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            level_dir,
            log_path,
            viewport,
            tick_ms,
        }
    }
}
