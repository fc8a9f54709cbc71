// src/config.rs

use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_SERVER_NAME: &str = "mcp-stub-server";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_SSE_HOST: &str = "0.0.0.0";
pub const DEFAULT_SSE_PORT: u16 = 8000;

/// Runtime settings shared by the stdio and SSE entry points.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimal MCP server exposing an empty tool registry")]
pub struct ServerConfig {
    /// Name reported to clients in the initialize handshake
    #[arg(long, env = "MCP_SERVER_NAME", default_value = DEFAULT_SERVER_NAME)]
    pub name: String,

    /// Instructions sent to clients; a generic welcome text is used when unset
    #[arg(long, env = "MCP_SERVER_INSTRUCTIONS")]
    pub instructions: Option<String>,

    /// Log filter directive (tracing EnvFilter syntax); logs go to stderr
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Bind address for the SSE transport
    #[arg(long, env = "MCP_SSE_HOST", default_value = DEFAULT_SSE_HOST)]
    pub host: String,

    /// Port for the SSE transport
    #[arg(long, env = "MCP_SSE_PORT", default_value_t = DEFAULT_SSE_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            instructions: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            host: DEFAULT_SSE_HOST.to_string(),
            port: DEFAULT_SSE_PORT,
        }
    }
}

impl ServerConfig {
    /// Checks that the server name was filled in.
    ///
    /// Generated copies of this server carry a `{{NAME}}` token until the
    /// generator substitutes it, so any leftover braces are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if name.contains("{{") || name.contains("}}") {
            return Err(ConfigError::UnsubstitutedPlaceholder(self.name.clone()));
        }
        Ok(())
    }

    pub fn sse_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> ServerConfig {
        let argv = std::iter::once("mcp-stdio").chain(args.iter().copied());
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--name",
            "weather",
            "--instructions",
            "ask about the weather",
            "--log-filter",
            "debug",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
        ]);
        assert_eq!(config.name, "weather");
        assert_eq!(config.instructions.as_deref(), Some("ask about the weather"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.sse_address(), "127.0.0.1:9100");
    }

    #[test]
    fn declared_defaults_match_default_impl() {
        let cmd = ServerConfig::command();
        let default_of = |id: &str| -> String {
            let arg = cmd.get_arguments().find(|arg| arg.get_id() == id).unwrap();
            arg.get_default_values()[0].to_string_lossy().into_owned()
        };

        let config = ServerConfig::default();
        assert_eq!(default_of("name"), config.name);
        assert_eq!(default_of("log_filter"), config.log_filter);
        assert_eq!(default_of("host"), config.host);
        assert_eq!(default_of("port"), config.port.to_string());
        assert!(config.instructions.is_none());
    }

    #[test]
    fn default_is_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.sse_address(), "0.0.0.0:8000");
    }

    #[test]
    fn rejects_blank_name() {
        for name in ["", "   "] {
            let config = ServerConfig {
                name: name.to_string(),
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::EmptyName));
        }
    }

    #[test]
    fn rejects_placeholder_name() {
        let config = ServerConfig {
            name: "{{NAME}}".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsubstitutedPlaceholder("{{NAME}}".to_string()))
        );
    }

    #[test]
    fn rejects_bad_port() {
        let argv = ["mcp-sse", "--port", "not-a-port"];
        assert!(ServerConfig::try_parse_from(argv).is_err());
    }
}
