use super::model::{Game, ModLoader};
use crate::core::error::{RunnerError, RunnerResult};

/// Built-in set of supported titles. The hosting application normally ships
/// its own catalog; this one covers the common Unity titles and serves the
/// tests.
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    pub fn builtin() -> Self {
        Self {
            games: vec![
                Game::new(
                    "RiskOfRain2",
                    "Risk of Rain 2",
                    vec!["Risk of Rain 2.exe".into(), "Risk of Rain 2".into()],
                    "Risk of Rain 2_Data",
                    ModLoader::bepinex(),
                ),
                Game::new(
                    "Valheim",
                    "Valheim",
                    vec!["valheim.exe".into(), "valheim.x86_64".into()],
                    "valheim_Data",
                    ModLoader::bepinex(),
                ),
                Game::new(
                    "LethalCompany",
                    "Lethal Company",
                    vec!["Lethal Company.exe".into()],
                    "Lethal Company_Data",
                    ModLoader::bepinex(),
                ),
                Game::new(
                    "BONEWORKS",
                    "BONEWORKS",
                    vec!["BONEWORKS.exe".into()],
                    "BONEWORKS_Data",
                    ModLoader::melon_loader(),
                ),
            ],
        }
    }

    pub fn find(&self, internal_folder_name: &str) -> Option<&Game> {
        self.games
            .iter()
            .find(|game| game.internal_folder_name == internal_folder_name)
    }

    pub fn get(&self, internal_folder_name: &str) -> RunnerResult<&Game> {
        self.find(internal_folder_name).ok_or_else(|| {
            RunnerError::resolution(
                "Unknown game",
                format!("{internal_folder_name} is not in the game catalog"),
                "Check that the game identifier matches a supported title",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::LoaderFlavor;

    #[test]
    fn builtin_catalog_finds_games_by_identifier() {
        let catalog = GameCatalog::builtin();
        let game = catalog.get("RiskOfRain2").unwrap();
        assert_eq!(game.display_name, "Risk of Rain 2");
        assert_eq!(game.loader.flavor, LoaderFlavor::BepInEx);
    }

    #[test]
    fn unknown_game_is_a_resolution_error() {
        let catalog = GameCatalog::builtin();
        let err = catalog.get("NotAGame").unwrap_err();
        assert_eq!(err.title(), "Unknown game");
        assert!(err.detail().contains("NotAGame"));
    }

    #[test]
    fn platform_exe_names_filter_by_extension() {
        let catalog = GameCatalog::builtin();
        let game = catalog.get("Valheim").unwrap();
        let names = game.platform_exe_names();
        if cfg!(target_os = "windows") {
            assert_eq!(names, vec!["valheim.exe"]);
        } else {
            assert_eq!(names, vec!["valheim.x86_64"]);
        }
    }
}
