//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Validation is a port so adapters can swap the rule engine

pub mod hotel_repository;
pub mod validator;

use std::sync::Arc;
use thiserror::Error;

pub use hotel_repository::HotelRepository;
pub use validator::{Rule, Rules, Validation, ValidationMessage, Validator};

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in `hotel-core`
/// so that services can accept it without depending on `hotel-db`.
#[derive(Clone)]
pub struct Repos {
    /// Hotel repository for CRUD operations on hotels.
    pub hotels: Arc<dyn HotelRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input failed validation. Carries the first failure message.
    #[error("{0}")]
    Validation(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
