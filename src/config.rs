use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{GameState, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS, MIN_DIMENSION};

/// Board dimensions for new games, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "width must be >= {MIN_DIMENSION}"
            )));
        }
        if self.height < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "height must be >= {MIN_DIMENSION}"
            )));
        }
        if self
            .width
            .checked_mul(self.height)
            .map_or(true, |cells| cells > MAX_CELLS)
        {
            return Err(ConfigError::Validation(format!(
                "width * height must be <= {MAX_CELLS}"
            )));
        }
        Ok(())
    }

    /// Start a game with these dimensions
    pub fn new_game(&self) -> Result<GameState, GameError> {
        GameState::new(self.width, self.height)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
