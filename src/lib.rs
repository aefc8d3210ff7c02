pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::error::{RunnerError, RunnerResult};
pub use crate::core::game::{Game, GameCatalog, LoaderFlavor, ModLoader};
pub use crate::core::instructions::{
    GameInstructionCatalog, InstructionSource, LaunchInstructions,
};
pub use crate::core::launch::{GameRunner, ProcessInvoker, ShellInvoker};
pub use crate::core::profile::Profile;
pub use crate::core::resolver::{GameDirectoryResolver, InstructionResolver, ResolvedArguments};
pub use crate::core::settings::{
    FileSettingsStore, GameSettings, SettingsDirectoryResolver, SettingsProvider,
};

/// Initialize structured logging for hosting applications that do not set
/// up their own subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
