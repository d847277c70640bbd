//! `paths` command - print resolved filesystem locations.

use anyhow::Result;

use hotel_core::{DATABASE_PATH_ENV, data_root, database_path};

pub fn execute() -> Result<()> {
    println!("Data root:     {}", data_root()?.display());
    println!("Database path: {}", database_path()?.display());
    println!();
    println!("Set {DATABASE_PATH_ENV} to use a different database file.");
    Ok(())
}
