// src/handler.rs

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    schema_utils::CallToolError, CallToolRequest, CallToolResult, ListToolsRequest,
    ListToolsResult, RpcError,
};
use rust_mcp_sdk::{mcp_server::ServerHandler, McpServer};

use crate::tools::ToolRegistry;

/// Answers MCP tool requests from the registry it owns.
pub struct StubServerHandler {
    registry: ToolRegistry,
}

impl StubServerHandler {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl Default for StubServerHandler {
    fn default() -> Self {
        Self::new(ToolRegistry::new())
    }
}

#[async_trait]
impl ServerHandler for StubServerHandler {
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            meta: None,
            next_cursor: None,
        })
    }

    /// Forwards the call to the registry; the error goes back to the SDK as-is.
    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        let params = request.params;
        tracing::debug!(tool = %params.name, "tools/call received");

        self.registry
            .call(&params.name, params.arguments)
            .inspect_err(|e| tracing::warn!(tool = %params.name, error = %e, "tool call rejected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handler_owns_empty_registry() {
        let handler = StubServerHandler::default();
        assert!(handler.registry().is_empty());
    }
}
