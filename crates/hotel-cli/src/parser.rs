//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the hotel API server.
#[derive(Parser)]
#[command(name = "hotel-api")]
#[command(about = "Serve the hotel CRUD API")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["hotel-api", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                db_path,
                allowed_origins,
            }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3333);
                assert!(db_path.is_none());
                assert!(allowed_origins.is_empty());
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "hotel-api",
            "-v",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--db-path",
            "/tmp/hotels.db",
            "--allowed-origin",
            "http://a.example",
            "--allowed-origin",
            "http://b.example",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Some(Commands::Serve {
            host,
            port,
            db_path,
            allowed_origins,
        }) = cli.command
        else {
            panic!("expected serve command");
        };
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 8080);
        assert_eq!(db_path.unwrap().to_str(), Some("/tmp/hotels.db"));
        assert_eq!(allowed_origins, ["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["hotel-api", "serve", "--port", "99999"]).is_err());
    }
}
