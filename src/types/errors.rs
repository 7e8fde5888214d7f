//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.
//!
//! None of these are recovered or retried internally: every error is logged
//! once at the point of detection and re-raised to the caller unchanged.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the toolgate gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// A tool is missing required configuration (typically its API URL).
    /// Raised before any network call is attempted.
    #[error("no API URL configured for tool: {0}")]
    Configuration(String),

    /// The requested plugin key has no configuration record at all.
    #[error("no configuration found for plugin: {0}")]
    MissingConfiguration(String),

    /// The plugin key is not in the dispatch table.
    #[error("unknown plugin key: {0}")]
    UnknownPlugin(String),

    /// An outbound request failed (transport error or non-2xx status).
    /// Always carries the tool name and the original failure message.
    #[error("failed to execute {tool}: {message}")]
    ToolExecution { tool: String, message: String },

    /// I/O errors (manifest directory loading).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn configuration(tool: impl Into<String>) -> Self {
        Self::Configuration(tool.into())
    }

    pub fn missing_configuration(plugin_key: impl Into<String>) -> Self {
        Self::MissingConfiguration(plugin_key.into())
    }

    pub fn unknown_plugin(plugin_key: impl Into<String>) -> Self {
        Self::UnknownPlugin(plugin_key.into())
    }

    pub fn tool_execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecution {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
