// ─── Launch ───
// Orchestrates a launch request and spawns the game process.

pub mod invoker;
pub mod runner;

pub use invoker::{ProcessInvoker, ShellInvoker};
pub use runner::GameRunner;
