//! CLI argument definitions using clap
//!
//! Commands:
//! - library-api serve [--config <path>] [--host <host>] [--port <port>]
//! - library-api check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// library-api - in-memory users, books and reviews service
#[derive(Parser, Debug)]
#[command(name = "library-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file, then print the effective config
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["library-api", "serve", "--port", "8080", "--host", "127.0.0.1"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_config_requires_path() {
        assert!(Cli::try_parse_from(["library-api", "check-config"]).is_err());
    }
}
