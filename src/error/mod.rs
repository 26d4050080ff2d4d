//! Error types and handling infrastructure for fixture regeneration

use std::path::PathBuf;

/// Main error type for regeneration operations
#[derive(Debug, thiserror::Error)]
pub enum RegenError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source directory does not exist: {}", path.display())]
    SourceDirMissing { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Regeneration failed for '{input}' (exit code {code:?})")]
    FileFailed { input: String, code: Option<i32> },
}

impl RegenError {
    pub fn io(message: impl Into<String>, path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path,
            source,
        }
    }

    pub fn spawn(program: PathBuf, source: std::io::Error) -> Self {
        Self::Spawn { program, source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { message, path, .. } => match path {
                Some(path) => format!("{} ({})", message, path.display()),
                None => message.clone(),
            },
            Self::Spawn { program, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    format!(
                        "Executable not found: {}. Build it before regenerating fixtures.",
                        program.display()
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for regeneration operations
pub type RegenResult<T> = Result<T, RegenError>;
