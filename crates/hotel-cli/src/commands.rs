//! Subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

use hotel_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "HOTEL_API_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "HOTEL_API_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// SQLite database file (defaults to HOTEL_API_DB_PATH or the data directory)
        #[arg(long = "db-path")]
        db_path: Option<PathBuf>,

        /// Allow only these CORS origins (repeatable); all origins when omitted
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// Show resolved filesystem paths
    Paths,
}
