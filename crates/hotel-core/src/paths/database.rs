//! Database path resolution.
//!
//! Provides the canonical path to the hotel `SQLite` database file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that overrides the database location.
pub const DATABASE_PATH_ENV: &str = "HOTEL_API_DB_PATH";

/// Application data directory (`<platform data dir>/hotel-api`).
pub fn data_root() -> Result<PathBuf, PathError> {
    dirs::data_dir()
        .map(|dir| dir.join("hotel-api"))
        .ok_or(PathError::NoDataDir)
}

/// Get the path to the hotel database file.
///
/// Uses `HOTEL_API_DB_PATH` when set and non-empty, otherwise
/// `<data_root>/data/hotels.db`. The parent directory is created if it
/// doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let path = match env::var_os(DATABASE_PATH_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => data_root()?.join("data").join("hotels.db"),
    };

    ensure_parent_dir(&path)?;
    Ok(path)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| PathError::CreateFailed {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_root_ends_with_app_dir() {
        if let Ok(root) = data_root() {
            assert!(root.ends_with("hotel-api"));
        }
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let temp = tempdir().unwrap();
        let db = temp.path().join("a").join("b").join("hotels.db");

        ensure_parent_dir(&db).unwrap();
        assert!(temp.path().join("a").join("b").is_dir());
        assert!(!db.exists());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_filename() {
        assert!(ensure_parent_dir(Path::new("hotels.db")).is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_rejects_empty_path() {
        assert!(matches!(
            ensure_parent_dir(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }
}
