use async_trait::async_trait;
use tracing::{error, warn};

use crate::core::error::{RunnerError, RunnerResult};

/// Spawns an external process from an assembled command line.
///
/// "Launched" means the OS accepted the process creation request, not that
/// the game ran to completion; implementations must not wait for exit.
#[async_trait]
pub trait ProcessInvoker: Send + Sync {
    async fn invoke(&self, command_line: &str) -> RunnerResult<()>;
}

/// Runs the command line through the platform shell, matching the legacy
/// single-string launch contract (instruction templates and user launch
/// parameters are free-form text, not pre-split argument arrays).
pub struct ShellInvoker {
    shell: String,
    shell_flag: &'static str,
}

impl ShellInvoker {
    pub fn new() -> Self {
        if cfg!(target_os = "windows") {
            Self {
                shell: "cmd".into(),
                shell_flag: "/C",
            }
        } else {
            Self {
                shell: "sh".into(),
                shell_flag: "-c",
            }
        }
    }

    #[cfg(test)]
    fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            shell_flag: "-c",
        }
    }
}

impl Default for ShellInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessInvoker for ShellInvoker {
    async fn invoke(&self, command_line: &str) -> RunnerResult<()> {
        let mut command = tokio::process::Command::new(&self.shell);
        command.arg(self.shell_flag);

        // cmd.exe does not parse the backslash-escaped quotes that argv
        // quoting produces, so on Windows the command line must bypass the
        // standard escaping and reach cmd verbatim.
        #[cfg(windows)]
        command.raw_arg(command_line);
        #[cfg(not(windows))]
        command.arg(command_line);

        match command.spawn() {
            Ok(child) => {
                // No handle is retained; the game outlives the launch call.
                drop(child);
                Ok(())
            }
            Err(e) => {
                warn!("Stopped launch attempt: process spawn failed");
                error!("{e}");
                Err(RunnerError::invocation(
                    "Error starting game",
                    e.to_string(),
                    "Ensure that the game executable path has been set correctly",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn spawn_of_trivial_command_succeeds() {
        let invoker = ShellInvoker::new();
        invoker.invoke("true").await.unwrap();
    }

    // Quoted executable paths are the normal case (assemble_command_line
    // always quotes the exe), and cmd.exe chokes on argv-style `\"`
    // escaping. The child writes a marker file so the test can observe
    // that cmd actually ran the quoted program.
    #[cfg(windows)]
    #[tokio::test]
    async fn quoted_executable_path_survives_cmd_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("launched.txt");
        let comspec =
            std::env::var("ComSpec").unwrap_or_else(|_| r"C:\Windows\System32\cmd.exe".into());

        let command_line = format!(r#""{}" /C echo ok > {}"#, comspec, marker.display());
        ShellInvoker::new().invoke(&command_line).await.unwrap();

        let mut waited = 0u64;
        while !marker.exists() && waited < 5_000 {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            waited += 100;
        }
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn spawn_failure_preserves_os_error_verbatim() {
        let invoker = ShellInvoker::with_shell("/nonexistent/shell-for-test");
        let expected_detail = std::process::Command::new("/nonexistent/shell-for-test")
            .spawn()
            .unwrap_err()
            .to_string();

        let err = invoker.invoke("whatever").await.unwrap_err();
        assert_eq!(err.title(), "Error starting game");
        assert_eq!(err.detail(), expected_detail);
        assert_eq!(
            err.remediation(),
            "Ensure that the game executable path has been set correctly"
        );
    }
}
