use crate::app_dirs::AppDirs;
use crate::prompt_generator::DEFAULT_PROMPT_LENGTH;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_TRIALS: usize = 5;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub trials: usize,
    pub prompt_length: usize,
    pub history_file: Option<PathBuf>,
    pub show_chart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            prompt_length: DEFAULT_PROMPT_LENGTH,
            history_file: None,
            show_chart: true,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("reaction_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => debug!(path = %self.path.display(), error = %e, "ignoring bad config"),
            }
        }
        Config::default()
    }
}
