// src/error.rs

use thiserror::Error;

/// Failures raised while dispatching a `tools/call` request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Startup configuration that cannot be served.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("server name must not be empty")]
    EmptyName,

    #[error("server name still contains a template placeholder: {0}")]
    UnsubstitutedPlaceholder(String),
}
