//! Persistent key/value state.
//!
//! The CLI remembers the last-used language, theme, and attribution choice
//! between invocations, so `inkpaste render main.rs` keeps producing what
//! the user last asked for. The store is a small YAML file under the user
//! config directory; flags always override stored values, and the rendering
//! core never touches persistence — it is handed a theme and text on each
//! invocation.
//!
//! Load semantics are forgiving: a missing file is the defaults, and a
//! corrupt file is reported (so the caller can notify and continue with
//! defaults) rather than aborting the render.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Last-used language identifier.
    #[serde(default)]
    pub language: Option<String>,
    /// Last-used theme id.
    #[serde(default)]
    pub theme: Option<String>,
    /// Whether the attribution footer was last enabled.
    #[serde(default)]
    pub attribution: bool,
    /// Last rendered source text, reused when `render` is invoked
    /// interactively with neither a file nor piped input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("state file {path} is not valid: {message}")]
    Parse { path: PathBuf, message: String },
}

/// File-backed store for [`State`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// A store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional store location, `<config dir>/inkpaste/state.yaml`.
    ///
    /// `None` when the platform reports no config directory; callers then
    /// simply run stateless.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkpaste").join("state.yaml"))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state.
    ///
    /// A missing file yields the defaults. A present-but-invalid file is an
    /// error so the caller can surface it — silently discarding a file the
    /// user may have hand-edited would hide their mistake.
    pub fn load(&self) -> Result<State, StateError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(State::default()),
            Err(e) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_yaml::from_str(&content).map_err(|e| StateError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Persists `state`, creating parent directories as needed.
    pub fn save(&self, state: &State) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StateError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = serde_yaml::to_string(state).map_err(|e| StateError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        std::fs::write(&self.path, content).map_err(|e| StateError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.yaml"));
        assert_eq!(store.load().unwrap(), State::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.yaml"));

        let state = State {
            language: Some("rs".to_string()),
            theme: Some("ember".to_string()),
            attribution: true,
            source: Some("fn main() {}\n".to_string()),
        };
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("nested").join("deep").join("state.yaml"));
        store.save(&State::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.yaml");
        std::fs::write(&path, "language: [unterminated").unwrap();

        let store = StateStore::new(&path);
        assert!(matches!(store.load(), Err(StateError::Parse { .. })));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.yaml");
        std::fs::write(&path, "theme: toxic\n").unwrap();

        let state = StateStore::new(&path).load().unwrap();
        assert_eq!(state.theme.as_deref(), Some("toxic"));
        assert_eq!(state.language, None);
        assert!(!state.attribution);
        assert_eq!(state.source, None);
    }

    #[test]
    fn absent_source_is_not_serialized() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.yaml"));
        store
            .save(&State {
                theme: Some("toxic".to_string()),
                ..Default::default()
            })
            .unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(!written.contains("source"));
    }
}
