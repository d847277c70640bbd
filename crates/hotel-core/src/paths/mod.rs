//! Filesystem path resolution.
//!
//! Resolves where the hotel database lives. The location can be pinned with
//! the `HOTEL_API_DB_PATH` environment variable; otherwise it falls under
//! the platform data directory.

mod database;
mod error;

pub use database::{DATABASE_PATH_ENV, data_root, database_path, ensure_parent_dir};
pub use error::PathError;
