//! `serve` command - run the HTTP server.

use anyhow::Result;
use std::path::PathBuf;

use hotel_axum::{ServerConfig, start_server};
use hotel_core::{database_path, ensure_parent_dir};

/// Build the server config from command arguments.
///
/// An explicit `db_path` wins over `HOTEL_API_DB_PATH` and the data directory.
pub fn build_config(
    host: String,
    port: u16,
    db_path: Option<PathBuf>,
    allowed_origins: Vec<String>,
) -> Result<ServerConfig> {
    let db_path = match db_path {
        Some(path) => {
            ensure_parent_dir(&path)?;
            path
        }
        None => database_path()?,
    };

    let mut config = ServerConfig::new(db_path).with_host(host).with_port(port);
    if !allowed_origins.is_empty() {
        config = config.with_allowed_origins(allowed_origins);
    }

    Ok(config)
}

/// Start the server and block until shutdown.
pub async fn execute(config: ServerConfig) -> Result<()> {
    tracing::info!(
        addr = %config.bind_addr(),
        database = %config.database_path.display(),
        "Starting hotel API"
    );
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_axum::CorsConfig;

    #[test]
    fn test_build_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hotels.db");

        let config =
            build_config("0.0.0.0".to_string(), 8080, Some(path.clone()), Vec::new()).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_path, path);
        assert_eq!(config.cors, CorsConfig::AllowAll);
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_build_config_restricts_origins() {
        let dir = tempfile::tempdir().unwrap();
        let origins = vec!["http://localhost:5173".to_string()];

        let config = build_config(
            "127.0.0.1".to_string(),
            3333,
            Some(dir.path().join("hotels.db")),
            origins.clone(),
        )
        .unwrap();

        assert_eq!(config.cors, CorsConfig::AllowOrigins(origins));
    }
}
