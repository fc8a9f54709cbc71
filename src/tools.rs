// src/tools.rs

use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult, Tool};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// The set of tools this server exposes.
///
/// Starts out empty. To add a tool, push its descriptor in [`ToolRegistry::new`]
/// and route its name in [`ToolRegistry::call`].
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Tool descriptors in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invokes the tool registered under `name`.
    ///
    /// No tool is registered yet, so every call fails with
    /// [`ToolError::UnknownTool`] carrying the requested name.
    pub fn call(
        &self,
        name: &str,
        _arguments: Option<Map<String, Value>>,
    ) -> Result<CallToolResult, CallToolError> {
        Err(CallToolError::new(ToolError::UnknownTool(name.to_string())))
    }
}
