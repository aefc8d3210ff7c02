use async_trait::async_trait;
use tracing::debug;

use crate::core::error::RunnerResult;
use crate::core::game::{Game, LoaderFlavor};
use crate::core::profile::Profile;

use super::{InstructionSource, LaunchInstructions};

/// Default instruction source: derives templates from the game's loader
/// flavor. Templates are rebuilt per request, never cached.
pub struct GameInstructionCatalog;

impl GameInstructionCatalog {
    pub fn new() -> Self {
        Self
    }

    fn bepinex_instructions() -> LaunchInstructions {
        // Unity Doorstop reads these arguments before the engine does.
        LaunchInstructions::new(
            "--doorstop-enable false",
            "--doorstop-enable true --doorstop-target {LOADER_PATH}",
        )
    }

    fn melon_loader_instructions() -> LaunchInstructions {
        LaunchInstructions::new(
            "--no-mods",
            "--melonloader.basedir {PROFILE_DIR}",
        )
    }
}

impl Default for GameInstructionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstructionSource for GameInstructionCatalog {
    async fn instructions_for(
        &self,
        game: &Game,
        profile: &Profile,
    ) -> RunnerResult<LaunchInstructions> {
        let instructions = match game.loader.flavor {
            LoaderFlavor::BepInEx => Self::bepinex_instructions(),
            LoaderFlavor::MelonLoader => Self::melon_loader_instructions(),
        };

        debug!(
            game = %game.internal_folder_name,
            profile = %profile.name(),
            flavor = %game.loader.flavor,
            "Selected launch instructions"
        );

        Ok(instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::{GameCatalog, ModLoader};

    fn profile() -> Profile {
        Profile::new("Default", "/tmp/profiles/Default")
    }

    #[tokio::test]
    async fn bepinex_games_get_doorstop_templates() {
        let catalog = GameCatalog::builtin();
        let game = catalog.get("RiskOfRain2").unwrap();

        let instructions = GameInstructionCatalog::new()
            .instructions_for(game, &profile())
            .await
            .unwrap();

        assert_eq!(instructions.vanilla_parameters, "--doorstop-enable false");
        assert_eq!(
            instructions.modded_parameters,
            "--doorstop-enable true --doorstop-target {LOADER_PATH}"
        );
    }

    #[tokio::test]
    async fn melon_loader_games_get_basedir_templates() {
        let game = Game::new(
            "BONEWORKS",
            "BONEWORKS",
            vec!["BONEWORKS.exe".into()],
            "BONEWORKS_Data",
            ModLoader::melon_loader(),
        );

        let instructions = GameInstructionCatalog::new()
            .instructions_for(&game, &profile())
            .await
            .unwrap();

        assert_eq!(instructions.vanilla_parameters, "--no-mods");
        assert_eq!(
            instructions.modded_parameters,
            "--melonloader.basedir {PROFILE_DIR}"
        );
    }

    #[tokio::test]
    async fn instructions_are_rebuilt_per_request() {
        let catalog = GameCatalog::builtin();
        let game = catalog.get("Valheim").unwrap();
        let source = GameInstructionCatalog::new();

        let first = source.instructions_for(game, &profile()).await.unwrap();
        let second = source.instructions_for(game, &profile()).await.unwrap();
        assert_eq!(first, second);
    }
}
