use crate::game::{Difficulty, FoodPlacement, GameSettings};
use crate::highscore::{JsonFileStore, MemoryStore, Storage};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay defaults
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn game_settings(&self) -> GameSettings {
        GameSettings {
            difficulty: self.game.difficulty,
            food_placement: self.game.food_placement,
        }
    }

    /// Return the store in which the best score should be kept.  If saving
    /// is disabled, or no file path is configured and the default one cannot
    /// be determined, the score is only kept in memory.
    pub(crate) fn high_score_store(&self) -> Storage {
        if !self.files.save_high_score {
            return MemoryStore::new().into();
        }
        match self
            .files
            .high_score_file
            .clone()
            .or_else(JsonFileStore::default_path)
        {
            Some(path) => {
                let store = JsonFileStore::new(path);
                log::debug!("Using high score file {}", store.path().display());
                store.into()
            }
            None => {
                log::warn!(
                    "Could not determine path to local data directory; best score will not be saved"
                );
                MemoryStore::new().into()
            }
        }
    }

    /// Return the path to write logs to: the file given in the configuration
    /// or, if that is not set, the default log file path
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Difficulty selected at startup
    pub(crate) difficulty: Difficulty,

    /// Whether to ring the terminal bell when food is eaten
    pub(crate) sound: bool,

    pub(crate) food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            difficulty: Difficulty::default(),
            sound: true,
            food_placement: FoodPlacement::default(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the best score in a file
    pub(crate) save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LoggingConfig {
    pub(crate) level: LevelFilter,

    /// File to write logs to
    pub(crate) file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
