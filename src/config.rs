//! Runtime configuration read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | seed for the piece generator (u64) | random |
//! | `BLOCKFALL_MUTED` | start with sound off (`1`/`true`) | off |
//! | `BLOCKFALL_LOG_PATH` | write a log file here | no logging |
//! | `BLOCKFALL_LOG_LEVEL` | `error`..`trace` | `info` |
//!
//! Unparseable values fall back to the default and are reported in
//! [`GameConfig::warnings`], since logging is not up yet when the config is read.

use std::env;

use log::LevelFilter;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const MUTED_VAR: &str = "BLOCKFALL_MUTED";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";
pub const LOG_LEVEL_VAR: &str = "BLOCKFALL_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub muted: bool,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub warnings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            muted: false,
            log_path: None,
            log_level: LevelFilter::Info,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` is this over `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = read(SEED_VAR) {
            match raw.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.warn(SEED_VAR, &raw),
            }
        }

        if let Some(raw) = read(MUTED_VAR) {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.muted = true,
                "0" | "false" | "no" | "off" => config.muted = false,
                _ => config.warn(MUTED_VAR, &raw),
            }
        }

        config.log_path = read(LOG_PATH_VAR);

        if let Some(raw) = read(LOG_LEVEL_VAR) {
            match raw.parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => config.warn(LOG_LEVEL_VAR, &raw),
            }
        }

        config
    }

    fn warn(&mut self, key: &str, value: &str) {
        self.warnings
            .push(format!("ignoring {key}={value:?}: not a valid value"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> GameConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), GameConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (SEED_VAR, "42"),
            (MUTED_VAR, "true"),
            (LOG_PATH_VAR, " /tmp/blockfall.log "),
            (LOG_LEVEL_VAR, "debug"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert!(config.muted);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_with_warnings() {
        let config = config_from(&[
            (SEED_VAR, "-1"),
            (MUTED_VAR, "loud"),
            (LOG_LEVEL_VAR, "chatty"),
            (LOG_PATH_VAR, "   "),
        ]);
        assert_eq!(config.seed, None);
        assert!(!config.muted);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.warnings.len(), 3);
    }
}
