//! # mcp_stub_server
//!
//! Minimal Model Context Protocol (MCP) server skeleton. It registers no
//! tools, rejects every `tools/call` with `Unknown tool: <name>`, and serves
//! the protocol over stdio (or SSE) through `rust-mcp-sdk`.
//!
//! ## Usage
//!
//! ```no_run
//! use mcp_stub_server::{start_stdio, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     start_stdio(ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! Binaries `mcp-stdio` and `mcp-sse` wrap the two entry points and read
//! their settings from flags or `MCP_*` environment variables.
//!
//! ## Adding tools
//!
//! Register descriptors in [`ToolRegistry::new`] and route their names in
//! [`ToolRegistry::call`]; the handler needs no changes.

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod tools;

pub use config::ServerConfig;
pub use error::{ConfigError, ToolError};
pub use handler::StubServerHandler;
pub use tools::ToolRegistry;

use rust_mcp_sdk::{
    error::SdkResult,
    mcp_server::{hyper_server, server_runtime, HyperServerOptions, ServerRuntime},
    schema::{
        Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesTools,
        LATEST_PROTOCOL_VERSION,
    },
    McpServer, StdioTransport, TransportOptions,
};

/// Builds the `initialize` response advertised to clients.
pub fn server_details(config: &ServerConfig) -> InitializeResult {
    let instructions = config.instructions.clone().unwrap_or_else(|| {
        format!(
            "Welcome to {}. Use list_tools to see available functionalities.",
            config.name
        )
    });

    InitializeResult {
        server_info: Implementation {
            name: config.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            ..Default::default()
        },
        protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
        instructions: Some(instructions),
        meta: None,
    }
}

fn log_banner(config: &ServerConfig, mode: &str, registry: &ToolRegistry) {
    tracing::info!(name = %config.name, mode, "starting MCP server");
    tracing::info!("available tools ({})", registry.len());
    for (i, tool) in registry.tools().iter().enumerate() {
        tracing::info!(
            "   {}. {} - {}",
            i + 1,
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }
}

/// Starts the MCP server in **stdio** mode.
///
/// Reads framed requests from stdin and writes framed responses to stdout
/// until the transport closes. Nothing else is written to stdout.
///
/// # Errors
///
/// Returns an `SdkResult` error if transport setup or the run loop fails.
pub async fn start_stdio(config: ServerConfig) -> SdkResult<()> {
    let server_details = server_details(&config);
    let handler = StubServerHandler::default();
    log_banner(&config, "stdio", handler.registry());

    let transport = StdioTransport::new(TransportOptions::default())?;
    let server: ServerRuntime = server_runtime::create_server(server_details, transport, handler);

    tracing::info!("listening for MCP requests on stdin");
    server.start().await?;
    tracing::info!("stdio transport closed");
    Ok(())
}

/// Starts the MCP server in **SSE** mode on `config.host:config.port`.
///
/// # Errors
///
/// Returns an `SdkResult` error if the HTTP server fails to bind or run.
pub async fn start_sse(config: ServerConfig) -> SdkResult<()> {
    let server_details = server_details(&config);
    let handler = StubServerHandler::default();
    log_banner(&config, "sse", handler.registry());

    let options = HyperServerOptions {
        host: config.host.clone(),
        port: config.port,
        ..Default::default()
    };
    let server = hyper_server::create_server(server_details, handler, options);

    tracing::info!("SSE server listening on http://{}", config.sse_address());
    server.start().await?;
    Ok(())
}
