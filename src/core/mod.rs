// ─── modrunner Core ───
// Launch pipeline for a mod manager: resolves how an installed game should
// be started (vanilla or with a mod loader injected) and spawns it.
//
// Architecture:
//   core/
//     game/         — Game model, mod-loader metadata, built-in catalog
//     profile/      — isolated mod installation context
//     instructions/ — per-game launch parameter templates
//     resolver/     — template token substitution
//     settings/     — per-game settings store + directory resolution
//     launch/       — launch coordinator + process invoker

pub mod error;
pub mod game;
pub mod instructions;
pub mod launch;
pub mod profile;
pub mod resolver;
pub mod settings;
