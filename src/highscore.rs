use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the high score between games & sessions
pub(crate) trait HighScoreStore: fmt::Debug {
    fn load(&self) -> Result<u32, LoadError>;
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// A store that forgets everything when the program exits
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore(u32);

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(self.0)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = score;
        Ok(())
    }
}

/// A store backed by a JSON file on disk
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStore {
    /// `None` if no path was configured and the default path could not be
    /// determined
    path: Option<PathBuf>,
}

impl FileStore {
    pub(crate) fn new(path: Option<PathBuf>) -> FileStore {
        FileStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32, LoadError> {
        let path = self.path().ok_or_else(LoadError::no_path)?;
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<HighScoreFile>(&src)
            .map(|f| f.high_score)
            .map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        let path = self.path().ok_or_else(SaveError::no_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&HighScoreFile { high_score: score })
            .map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreFile {
    high_score: u32,
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error_chain;
    use tempfile::tempdir;

    #[test]
    fn memory_store_remembers() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), 17);
    }

    #[test]
    fn missing_file_is_zero() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(Some(tmp.path().join("highscore.json")));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("dir").join("highscore.json");
        let mut store = FileStore::new(Some(path.clone()));
        store.save(42).unwrap();
        assert_eq!(
            fs_err::read_to_string(&path).unwrap(),
            "{\"high_score\":42}\n"
        );
        assert_eq!(FileStore::new(Some(path)).load().unwrap(), 42);
    }

    #[test]
    fn garbage_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("highscore.json");
        fs_err::write(&path, "not json").unwrap();
        let e = FileStore::new(Some(path)).load().unwrap_err();
        assert!(matches!(e.0, LoadErrorSource::Deserialize(_)));
        assert!(error_chain(&e).starts_with(
            "Failed to read high score from disk: failed to deserialize high score: "
        ));
    }

    #[test]
    fn no_path() {
        let mut store = FileStore::new(None);
        assert!(matches!(store.load(), Err(LoadError(LoadErrorSource::NoPath))));
        assert!(matches!(
            store.save(3),
            Err(SaveError(SaveErrorSource::NoPath))
        ));
    }
}
