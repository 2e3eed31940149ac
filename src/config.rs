//! Lumos configuration.
//!
//! Loaded from `~/.lumos/config.toml` unless a path is given. Every key is
//! optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::NavigationTab;

/// Default recording tick: one second, like a real recorder.
const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("tick-millis must be greater than zero in {0}")]
    ZeroTick(PathBuf),
}

/// Lumos configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Milliseconds per recording tick.
    pub tick_millis: u64,

    /// The tab shown at launch.
    pub start_tab: NavigationTab,

    /// Where the TUI writes its log. Defaults to `~/.lumos/lumos.log`.
    pub log_file: Option<PathBuf>,

    /// Seed file used when `--seed` is not passed.
    pub seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_millis: DEFAULT_TICK_MILLIS,
            start_tab: NavigationTab::Today,
            log_file: None,
            seed: None,
        }
    }
}

impl Config {
    /// Load config from `path`, or from `~/.lumos/config.toml` when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path().ok_or(ConfigError::NoHome)?,
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config: Self = match toml::from_str(&contents) {
            Ok(c) => c,
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };

        if config.tick_millis == 0 {
            return Err(ConfigError::ZeroTick(path));
        }

        Ok(config)
    }

    /// The Lumos home directory: `~/.lumos/`.
    pub fn home() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".lumos"))
    }

    /// The config file path: `~/.lumos/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::home().map(|h| h.join("config.toml"))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// The log file: configured, or `~/.lumos/lumos.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::home().map(|h| h.join("lumos.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick(), Duration::from_secs(1));
    }

    #[test]
    fn reads_kebab_case_keys() {
        let (_dir, path) = write_config(
            "tick-millis = 250\n\
             start-tab = \"messages\"\n\
             log-file = \"/tmp/lumos.log\"\n",
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tick_millis, 250);
        assert_eq!(config.start_tab, NavigationTab::Messages);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/lumos.log")));
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("start-tab = \"avatar\"\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tick_millis, DEFAULT_TICK_MILLIS);
        assert_eq!(config.start_tab, NavigationTab::Avatar);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let (_dir, path) = write_config("tick-millis = 0\n");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTick(_)));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let (_dir, path) = write_config("start-tab = \"nowhere\"\n");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
