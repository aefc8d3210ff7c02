// ─── Launch Instructions ───
// Per-game launch parameter templates, vanilla and modded.

use async_trait::async_trait;

use crate::core::error::RunnerResult;
use crate::core::game::Game;
use crate::core::profile::Profile;

mod catalog;

pub use catalog::GameInstructionCatalog;

/// Raw launch parameter templates for one (game, profile) pair.
///
/// Both strings may contain `{TOKEN}` placeholders understood by the
/// resolver. A value is built fresh on every request and must never be
/// reused for a different (game, profile) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchInstructions {
    pub vanilla_parameters: String,
    pub modded_parameters: String,
}

impl LaunchInstructions {
    pub fn new(
        vanilla_parameters: impl Into<String>,
        modded_parameters: impl Into<String>,
    ) -> Self {
        Self {
            vanilla_parameters: vanilla_parameters.into(),
            modded_parameters: modded_parameters.into(),
        }
    }
}

/// Supplies launch parameter templates per game. May perform read I/O
/// (e.g. per-game launch metadata on disk); no other side effects.
#[async_trait]
pub trait InstructionSource: Send + Sync {
    /// Fails with a resolution error when no instructions are defined for
    /// the game.
    async fn instructions_for(
        &self,
        game: &Game,
        profile: &Profile,
    ) -> RunnerResult<LaunchInstructions>;
}
