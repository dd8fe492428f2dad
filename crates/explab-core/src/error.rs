use thiserror::Error;

/// Errors produced while rendering a configuration into a command line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unsupported value at `{path}`: {reason}")]
    UnsupportedValue { path: String, reason: String },
    #[error("value at `{path}` cannot form a shell token: {reason}")]
    ShellEscape { path: String, reason: String },
}

impl CommandError {
    /// The dotted key path of the configuration node that failed to render.
    pub fn path(&self) -> &str {
        match self {
            CommandError::UnsupportedValue { path, .. } => path,
            CommandError::ShellEscape { path, .. } => path,
        }
    }
}

/// Errors produced while loading or merging experiment configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("configuration root must be a mapping, got {0}")]
    RootNotMapping(&'static str),
    #[error(transparent)]
    Value(#[from] CommandError),
}
