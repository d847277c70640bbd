//! Hotel repository trait definition.
//!
//! This port defines the interface for hotel persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Hotel, NewHotel};

/// Repository for hotel persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, find, insert, save, delete
/// - A missing row on lookup is `Ok(None)`, not an error
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List all hotels, ordered by ID.
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Find a hotel by its database ID.
    async fn find(&self, id: i64) -> Result<Option<Hotel>, RepositoryError>;

    /// Insert a new hotel.
    ///
    /// Returns the persisted hotel with its assigned ID and timestamps.
    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError>;

    /// Persist the writable fields of an existing hotel.
    ///
    /// Returns the stored hotel with a refreshed `updated_at`.
    /// Returns `Err(RepositoryError::NotFound)` if the row no longer exists.
    async fn save(&self, hotel: &Hotel) -> Result<Hotel, RepositoryError>;

    /// Delete a hotel by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the row doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
