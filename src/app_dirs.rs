use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_NAME: &str = "reaction";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn history_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join(crate::history::DEFAULT_HISTORY_FILE))
        } else {
            ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
                proj_dirs
                    .data_local_dir()
                    .join(crate::history::DEFAULT_HISTORY_FILE)
            })
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_path_ends_with_results_file() {
        if let Some(path) = AppDirs::history_path() {
            assert!(path.ends_with("neuro_results.json"));
        }
    }

    #[test]
    fn config_path_is_json() {
        if let Some(path) = AppDirs::config_path() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        }
    }
}
