// ─── Parameter Resolver ───
// Expands instruction templates into concrete argument strings.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::{RunnerError, RunnerResult};
use crate::core::game::Game;
use crate::core::profile::Profile;

/// A fully substituted argument string, ready for process invocation.
/// No recognized placeholder survives in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArguments(String);

impl ResolvedArguments {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResolvedArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Looks up where a game is installed. Discovery itself (store libraries,
/// registry, manual selection) lives in the hosting application; the
/// resolver only consumes the result.
#[async_trait]
pub trait GameDirectoryResolver: Send + Sync {
    async fn game_directory(&self, game: &Game) -> RunnerResult<std::path::PathBuf>;
}

/// Substitutes `{TOKEN}` placeholders in an instruction template.
///
/// Recognized tokens: `{PROFILE_DIR}`, `{PROFILE_NAME}`, `{GAME_DIR}`,
/// `{DATA_DIR}`, `{LOADER_PATH}`. Unrecognized tokens pass through
/// literally — a deliberate permissive policy so unknown or future tokens
/// never break a launch.
pub struct InstructionResolver {
    directories: Arc<dyn GameDirectoryResolver>,
}

impl InstructionResolver {
    pub fn new(directories: Arc<dyn GameDirectoryResolver>) -> Self {
        Self { directories }
    }

    /// Expand `template` for the given (game, profile) pair.
    ///
    /// Fails only when a required substitution source is unavailable: the
    /// game directory lookup runs lazily, so a template without
    /// `{GAME_DIR}`/`{DATA_DIR}` never touches the directory resolver.
    pub async fn resolve(
        &self,
        template: &str,
        game: &Game,
        profile: &Profile,
    ) -> RunnerResult<ResolvedArguments> {
        let profile_dir = path_str(profile.root());
        let loader_path = path_str(&profile.joined(&game.loader.relative_entry_point));

        let mut resolved = template
            .replace("{PROFILE_DIR}", &profile_dir)
            .replace("{PROFILE_NAME}", profile.name())
            .replace("{LOADER_PATH}", &loader_path);

        if resolved.contains("{GAME_DIR}") || resolved.contains("{DATA_DIR}") {
            let game_dir = self
                .directories
                .game_directory(game)
                .await
                .map_err(|source| {
                    RunnerError::resolution(
                        "Unable to resolve game directory",
                        source.detail(),
                        "Set or correct the game install location in the settings",
                    )
                })?;
            let data_dir = game_dir.join(&game.data_folder_name);
            resolved = resolved
                .replace("{GAME_DIR}", &path_str(&game_dir))
                .replace("{DATA_DIR}", &path_str(&data_dir));
        }

        debug!(
            game = %game.internal_folder_name,
            profile = %profile.name(),
            template = %template,
            resolved = %resolved,
            "Resolved instruction template"
        );

        Ok(ResolvedArguments(resolved))
    }
}

/// Path rendered for an argument string. Windows extended-length prefixes
/// (`\\?\C:\...`) confuse Unity Doorstop, so they are stripped.
fn path_str(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();

    #[cfg(target_os = "windows")]
    {
        if let Some(stripped) = text.strip_prefix(r"\\?\") {
            return stripped.to_string();
        }
    }

    text
}
