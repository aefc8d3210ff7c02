use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launch pipeline.
/// Every module returns `Result<T, RunnerError>`.
///
/// The launch-facing variants carry the (title, detail, remediation) triple
/// surfaced to the user: a short title, the technical detail (may be empty)
/// and a human remediation hint (may be empty).
#[derive(Debug, Error)]
pub enum RunnerError {
    // ── Launch pipeline ─────────────────────────────────
    /// A required setting is missing. The launch is never attempted.
    #[error("{title}: {detail}")]
    Configuration {
        title: String,
        detail: String,
        remediation: String,
    },

    /// Instructions or a required template token could not be resolved.
    #[error("{title}: {detail}")]
    Resolution {
        title: String,
        detail: String,
        remediation: String,
    },

    /// The OS rejected or failed the spawn attempt. `detail` holds the raw
    /// OS error message verbatim.
    #[error("{title}: {detail}")]
    Invocation {
        title: String,
        detail: String,
        remediation: String,
    },

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type RunnerResult<T> = Result<T, RunnerError>;

impl RunnerError {
    pub fn configuration(
        title: impl Into<String>,
        detail: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        RunnerError::Configuration {
            title: title.into(),
            detail: detail.into(),
            remediation: remediation.into(),
        }
    }

    pub fn resolution(
        title: impl Into<String>,
        detail: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        RunnerError::Resolution {
            title: title.into(),
            detail: detail.into(),
            remediation: remediation.into(),
        }
    }

    pub fn invocation(
        title: impl Into<String>,
        detail: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        RunnerError::Invocation {
            title: title.into(),
            detail: detail.into(),
            remediation: remediation.into(),
        }
    }

    /// Short user-facing title.
    pub fn title(&self) -> &str {
        match self {
            RunnerError::Configuration { title, .. }
            | RunnerError::Resolution { title, .. }
            | RunnerError::Invocation { title, .. } => title,
            RunnerError::Io { .. } => "File system error",
            RunnerError::Json(_) => "Invalid settings data",
        }
    }

    /// Technical detail, empty when there is nothing beyond the title.
    pub fn detail(&self) -> String {
        match self {
            RunnerError::Configuration { detail, .. }
            | RunnerError::Resolution { detail, .. }
            | RunnerError::Invocation { detail, .. } => detail.clone(),
            RunnerError::Io { path, source } => format!("{}: {}", path.display(), source),
            RunnerError::Json(e) => e.to_string(),
        }
    }

    /// Human remediation hint, empty when no action helps.
    pub fn remediation(&self) -> &str {
        match self {
            RunnerError::Configuration { remediation, .. }
            | RunnerError::Resolution { remediation, .. }
            | RunnerError::Invocation { remediation, .. } => remediation,
            RunnerError::Io { .. } | RunnerError::Json(_) => "",
        }
    }
}

impl From<std::io::Error> for RunnerError {
    fn from(source: std::io::Error) -> Self {
        RunnerError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

// ── Serialization for hosting-app surfaces ──────────────
// Hosting applications forward errors over IPC, which requires the error
// type to implement `Serialize`.
impl serde::Serialize for RunnerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
