//! Server configuration.

use clap::Parser;

/// Command-line configuration for the chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "chatzilla-server", about = "Presence-aware chat session server")]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Bind port
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // when:
        let config = ServerConfig::parse_from(["chatzilla-server"]);

        // then:
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_overrides() {
        // when:
        let config =
            ServerConfig::parse_from(["chatzilla-server", "--host", "0.0.0.0", "--port", "8080"]);

        // then:
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }
}
