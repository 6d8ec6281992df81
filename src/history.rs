use crate::app_dirs::AppDirs;
use crate::session::SessionRecord;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_HISTORY_FILE: &str = "neuro_results.json";

/// What was found on disk. Appends work on raw entries (`HistoryLoad<Value>`)
/// so entries of any shape survive a rewrite.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryLoad<T = SessionRecord> {
    /// No history file yet
    Missing,
    Loaded(Vec<T>),
    /// The file exists but is not a JSON array; history starts over
    Unreadable { reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("history could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait HistoryStore {
    fn load(&self) -> HistoryLoad;
    /// Append one session and rewrite the store. Returns the new entry count.
    fn append(&self, session: &SessionRecord) -> Result<usize, HistoryError>;
}

/// JSON array of sessions, rewritten whole on every append
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new() -> Self {
        let path = AppDirs::history_path().unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file that receives the bytes of an unreadable history
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_HISTORY_FILE.into());
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    fn back_up_unreadable(&self) -> io::Result<()> {
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        warn!(backup = %backup.display(), "kept a copy of the unreadable history");
        Ok(())
    }

    fn load_entries(&self) -> HistoryLoad<Value> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return HistoryLoad::Missing,
            Err(e) => {
                return HistoryLoad::Unreadable {
                    reason: e.to_string(),
                }
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return HistoryLoad::Loaded(Vec::new());
        }

        match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(entries) => HistoryLoad::Loaded(entries),
            Err(e) => HistoryLoad::Unreadable {
                reason: e.to_string(),
            },
        }
    }
}

impl Default for FileHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for FileHistoryStore {
    /// Typed view of the history; entries that are not sessions are skipped
    fn load(&self) -> HistoryLoad {
        match self.load_entries() {
            HistoryLoad::Missing => HistoryLoad::Missing,
            HistoryLoad::Unreadable { reason } => HistoryLoad::Unreadable { reason },
            HistoryLoad::Loaded(entries) => {
                let total = entries.len();
                let sessions: Vec<SessionRecord> = entries
                    .into_iter()
                    .filter_map(|entry| serde_json::from_value(entry).ok())
                    .collect();
                if sessions.len() < total {
                    debug!(skipped = total - sessions.len(), "history has non-session entries");
                }
                HistoryLoad::Loaded(sessions)
            }
        }
    }

    fn append(&self, session: &SessionRecord) -> Result<usize, HistoryError> {
        let mut entries = match self.load_entries() {
            HistoryLoad::Missing => {
                debug!(path = %self.path.display(), "starting a new history file");
                Vec::new()
            }
            HistoryLoad::Loaded(entries) => entries,
            HistoryLoad::Unreadable { reason } => {
                warn!(
                    path = %self.path.display(),
                    %reason,
                    "history unreadable, starting fresh"
                );
                self.back_up_unreadable()?;
                Vec::new()
            }
        };

        entries.push(serde_json::to_value(session)?);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&entries)?;
        fs::write(&self.path, data)?;

        Ok(entries.len())
    }
}
