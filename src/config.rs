use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    board::{self, check_playable, Board, CENTER},
    search::Solver,
};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Board(#[from] board::Error),
}

/// Solver configuration, loadable from TOML.
///
/// ```toml
/// hole = [3, 3]
/// target = [3, 3]
/// timeout_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The empty cell of the opening position; the centre when unset.
    pub hole: Option<(usize, usize)>,
    /// Where the last peg must end up.
    pub target: (usize, usize),
    /// A position in board text, used instead of the opening. Conflicts with
    /// `hole`.
    pub position: Option<String>,
    /// Stop searching after this many milliseconds.
    pub timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hole: None,
            target: CENTER,
            position: None,
            timeout_ms: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((row, col)) = self.hole {
            check_playable(row, col)?;
        }
        check_playable(self.target.0, self.target.1)?;
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation("timeout_ms must be > 0".into()));
        }
        if let Some(position) = &self.position {
            if self.hole.is_some() {
                return Err(ConfigError::Validation(
                    "hole and position are mutually exclusive".into(),
                ));
            }
            position.parse::<Board>()?;
        }
        Ok(())
    }

    /// The board to search from.
    pub fn board(&self) -> Result<Board, ConfigError> {
        let board = match &self.position {
            Some(position) => position.parse()?,
            None => {
                let (row, col) = self.hole.unwrap_or(CENTER);
                Board::with_hole(row, col)?
            }
        };
        Ok(board)
    }

    /// A solver for the configured target and timeout.
    ///
    /// The timeout starts counting when this is called.
    pub fn solver(&self) -> Result<Solver, ConfigError> {
        let solver = Solver::with_target(self.target.0, self.target.1)?;
        Ok(match self.timeout_ms {
            Some(ms) => solver.with_timeout(Duration::from_millis(ms)),
            None => solver,
        })
    }
}
