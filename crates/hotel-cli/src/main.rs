//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, and dispatches to command handlers.

use clap::{CommandFactory, Parser};

use hotel_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env fallbacks apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            db_path,
            allowed_origins,
        } => {
            let config = handlers::serve::build_config(host, port, db_path, allowed_origins)?;
            handlers::serve::execute(config).await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
    }

    Ok(())
}
