//! Composition utilities for building services with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use hotel_core::{HotelService, Repos, Validator};

use crate::repositories::SqliteHotelRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteHotelRepository::new(pool)))
    }

    /// Build a `HotelService` from a pool and a validator.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let service = HotelService::new(repos.hotels, validator);
    /// ```
    pub fn build_hotel_service(pool: SqlitePool, validator: Arc<dyn Validator>) -> HotelService {
        let repos = Self::build_repos(pool);
        HotelService::new(repos.hotels, validator)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a hotel repository using this test database.
    pub fn hotel_repository(&self) -> SqliteHotelRepository {
        SqliteHotelRepository::new(self.pool.clone())
    }
}
