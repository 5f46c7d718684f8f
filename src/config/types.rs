use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header (default: "Counter").
    #[serde(default = "default_title")]
    pub title: String,
    /// Input poll and redraw cadence in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse events so the buttons can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings. Logging stays off unless a file is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const MIN_TICK_RATE_MS: u64 = 1;
pub const MAX_TICK_RATE_MS: u64 = 10_000;

fn default_title() -> String {
    "Counter".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}
