//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `BOOKKEEPER_DATA_PATH`: data file (default: `"data/bookkeeper.json"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `BOOKKEEPER_SAMPLE_DATA`: seed sample data when no data file exists (default: `true`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub log_level: String,
    pub use_sample_data: bool,
}

impl Config {
    pub const DEFAULT_DATA_PATH: &'static str = "data/bookkeeper.json";

    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("BOOKKEEPER_DATA_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            use_sample_data: lookup("BOOKKEEPER_SAMPLE_DATA")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.use_sample_data),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(Self::DEFAULT_DATA_PATH),
            log_level: "info".to_string(),
            use_sample_data: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
