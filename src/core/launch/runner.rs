use std::sync::Arc;

use tracing::info;

use crate::core::error::{RunnerError, RunnerResult};
use crate::core::game::Game;
use crate::core::instructions::InstructionSource;
use crate::core::profile::Profile;
use crate::core::resolver::{InstructionResolver, ResolvedArguments};
use crate::core::settings::SettingsProvider;

use super::invoker::ProcessInvoker;

/// Coordinates a launch request: fetches instructions, resolves the
/// argument template, reads the configured executable path and delegates
/// to the process invoker.
///
/// Every collaborator is injected, so a hosting application (or a test)
/// supplies its own settings store, instruction source and invoker. Each
/// `start_*` call is an independent flow with no shared mutable state;
/// preventing concurrent launches of the same profile is the caller's
/// responsibility.
pub struct GameRunner {
    instructions: Arc<dyn InstructionSource>,
    resolver: InstructionResolver,
    settings: Arc<dyn SettingsProvider>,
    invoker: Arc<dyn ProcessInvoker>,
}

impl GameRunner {
    pub fn new(
        instructions: Arc<dyn InstructionSource>,
        resolver: InstructionResolver,
        settings: Arc<dyn SettingsProvider>,
        invoker: Arc<dyn ProcessInvoker>,
    ) -> Self {
        Self {
            instructions,
            resolver,
            settings,
            invoker,
        }
    }

    /// Resolved modded argument string without launching, for callers that
    /// only need the command (e.g. a "copy launch command" affordance).
    pub async fn game_arguments(
        &self,
        game: &Game,
        profile: &Profile,
    ) -> RunnerResult<ResolvedArguments> {
        let instructions = self.instructions.instructions_for(game, profile).await?;
        self.resolver
            .resolve(&instructions.modded_parameters, game, profile)
            .await
    }

    /// Launch the game with the mod loader injected. A resolution failure
    /// is returned immediately; no process is spawned.
    pub async fn start_modded(&self, game: &Game, profile: &Profile) -> RunnerResult<()> {
        let args = self.game_arguments(game, profile).await?;
        self.start(game, args.as_str()).await
    }

    /// Launch the game unmodified. The vanilla template is assumed already
    /// concrete and is passed through without token substitution.
    pub async fn start_vanilla(&self, game: &Game, profile: &Profile) -> RunnerResult<()> {
        let instructions = self.instructions.instructions_for(game, profile).await?;
        self.start(game, &instructions.vanilla_parameters).await
    }

    async fn start(&self, game: &Game, args: &str) -> RunnerResult<()> {
        let settings = self.settings.settings_for(game).await?;

        let Some(exe_path) = settings.game_executable_path else {
            return Err(RunnerError::configuration(
                "Game executable path not set",
                "",
                "Please set the game executable path in the settings",
            ));
        };

        let command_line =
            assemble_command_line(&exe_path.to_string_lossy(), args, &settings.launch_parameters);

        info!("Game executable path is: {}", exe_path.display());
        info!("Running command: {command_line}");

        self.invoker.invoke(&command_line).await
    }
}

/// `"<exe>" <args> <user launch parameters>`, in that order. User
/// parameters come last so they can override or add flags.
fn assemble_command_line(exe_path: &str, args: &str, launch_parameters: &str) -> String {
    let mut command_line = format!("\"{exe_path}\"");
    for part in [args, launch_parameters] {
        if !part.is_empty() {
            command_line.push(' ');
            command_line.push_str(part);
        }
    }
    command_line
}
