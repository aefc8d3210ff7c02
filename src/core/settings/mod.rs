// ─── Settings ───
// Per-game launch settings: executable path and user launch parameters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{RunnerError, RunnerResult};
use crate::core::game::Game;
use crate::core::resolver::GameDirectoryResolver;

const APP_DIR_NAME: &str = "modrunner";

/// User-configured launch settings for one game.
///
/// `launch_parameters` is free-form user input appended verbatim to the
/// command line, positionally last so it can override earlier flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub game_executable_path: Option<PathBuf>,
    pub launch_parameters: String,
}

/// Read access to per-game settings. Each read is a snapshot; the launch
/// pipeline never writes through this trait.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn settings_for(&self, game: &Game) -> RunnerResult<GameSettings>;
}

/// JSON-file-backed settings store, one file per game under
/// `<data_dir>/settings/<game>.json`. A missing file yields defaults.
pub struct FileSettingsStore {
    settings_dir: PathBuf,
}

impl FileSettingsStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: data_dir.into().join("settings"),
        }
    }

    /// Store rooted at the platform data directory
    /// (e.g. `~/.local/share/modrunner`).
    pub fn at_default_location() -> Self {
        Self::new(default_data_dir())
    }

    fn settings_path(&self, game: &Game) -> PathBuf {
        self.settings_dir
            .join(format!("{}.json", game.internal_folder_name))
    }

    /// Persist settings for a game, creating the settings directory on
    /// first write.
    pub async fn save_for(&self, game: &Game, settings: &GameSettings) -> RunnerResult<()> {
        let path = self.settings_path(game);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| RunnerError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| RunnerError::Io { path, source })?;

        info!(game = %game.internal_folder_name, "Saved game settings");
        Ok(())
    }
}

#[async_trait]
impl SettingsProvider for FileSettingsStore {
    async fn settings_for(&self, game: &Game) -> RunnerResult<GameSettings> {
        let path = self.settings_path(game);
        if !path.exists() {
            return Ok(GameSettings::default());
        }

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RunnerError::Io {
                path: path.clone(),
                source,
            })?;

        match serde_json::from_str(&json) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt settings file, using defaults");
                Ok(GameSettings::default())
            }
        }
    }
}

/// Derives the game directory from the configured executable path. Full
/// discovery (store libraries, manual selection) belongs to the hosting
/// application; this covers the common case where the executable has
/// already been configured.
pub struct SettingsDirectoryResolver {
    settings: Arc<dyn SettingsProvider>,
}

impl SettingsDirectoryResolver {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl GameDirectoryResolver for SettingsDirectoryResolver {
    async fn game_directory(&self, game: &Game) -> RunnerResult<PathBuf> {
        let settings = self.settings.settings_for(game).await?;
        let exe_path = settings.game_executable_path.ok_or_else(|| {
            RunnerError::resolution(
                "Game directory not found",
                format!("No executable path configured for {}", game.display_name),
                "Set the game executable path in the settings",
            )
        })?;

        // A mismatched name usually means the user pointed the setting at a
        // launcher stub or the wrong file; the lookup still goes through.
        if let Some(name) = exe_path.file_name().and_then(|n| n.to_str()) {
            if !game.platform_exe_names().contains(&name) {
                warn!(
                    game = %game.internal_folder_name,
                    executable = name,
                    "Configured executable does not match any known name for this game"
                );
            }
        }

        match exe_path.parent() {
            Some(parent) if parent != Path::new("") => Ok(parent.to_path_buf()),
            _ => Err(RunnerError::resolution(
                "Game directory not found",
                format!("{} has no parent directory", exe_path.display()),
                "Set the full game executable path in the settings",
            )),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
