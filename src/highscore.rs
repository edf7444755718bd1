use enum_dispatch::enum_dispatch;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the best score is stored
pub(crate) const HIGH_SCORE_KEY: &str = "highScore";

/// Somewhere to keep the best score between sessions
#[enum_dispatch]
pub(crate) trait HighScoreStore {
    /// Fetch the stored best score.  Returns `Ok(None)` if nothing has been
    /// stored yet.
    fn get_high_score(&mut self) -> Result<Option<u32>, LoadError>;

    fn set_high_score(&mut self, score: u32) -> Result<(), SaveError>;
}

/// The store selected by the configuration
#[enum_dispatch(HighScoreStore)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Storage {
    JsonFileStore,
    MemoryStore,
}

/// A store that keeps the best score for the lifetime of the process only
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore(Option<u32>);

impl MemoryStore {
    pub(crate) fn new() -> MemoryStore {
        MemoryStore::default()
    }

    #[cfg(test)]
    pub(crate) fn with_score(score: u32) -> MemoryStore {
        MemoryStore(Some(score))
    }
}

impl HighScoreStore for MemoryStore {
    fn get_high_score(&mut self) -> Result<Option<u32>, LoadError> {
        Ok(self.0)
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = Some(score);
        Ok(())
    }
}

/// A store backed by a JSON object on disk.  Keys other than
/// [`HIGH_SCORE_KEY`] are preserved when saving.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: PathBuf) -> JsonFileStore {
        JsonFileStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src)
            .map(Some)
            .map_err(LoadError::deserialize)
    }
}

impl HighScoreStore for JsonFileStore {
    fn get_high_score(&mut self) -> Result<Option<u32>, LoadError> {
        let Some(map) = self.read_map()? else {
            return Ok(None);
        };
        match map.get(HIGH_SCORE_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or(LoadError(LoadErrorSource::BadValue)),
        }
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), SaveError> {
        // An unreadable file is replaced rather than blocking the save.
        let mut map = self.read_map().ok().flatten().unwrap_or_default();
        map.insert(HIGH_SCORE_KEY.to_owned(), Value::from(score));
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&map).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    pub(crate) fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
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
    pub(crate) fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score file")]
    Deserialize(#[source] serde_json::Error),
    #[error("stored high score is not a non-negative 32-bit integer")]
    BadValue,
}
