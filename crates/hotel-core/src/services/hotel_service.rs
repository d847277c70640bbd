//! Hotel service - orchestrates validation and persistence for hotels.
//!
//! Every write path validates the raw request body first and only then
//! touches the repository. Lookups that find nothing return `Ok(None)`;
//! deciding how to report that is the adapter's job.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::{Hotel, HotelInput, NewHotel, hotel_rules};
use crate::ports::{CoreError, HotelRepository, RepositoryError, Rules, Validator};

/// Service for hotel CRUD operations.
pub struct HotelService {
    repo: Arc<dyn HotelRepository>,
    validator: Arc<dyn Validator>,
    rules: Rules,
}

impl HotelService {
    /// Create a new hotel service with the standard hotel rules.
    pub fn new(repo: Arc<dyn HotelRepository>, validator: Arc<dyn Validator>) -> Self {
        Self {
            repo,
            validator,
            rules: hotel_rules(),
        }
    }

    /// List all hotels.
    pub async fn list(&self) -> Result<Vec<Hotel>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Get a hotel by ID.
    pub async fn get(&self, id: i64) -> Result<Option<Hotel>, CoreError> {
        tracing::debug!(hotel_id = id, "Looking up hotel");
        Ok(self.repo.find(id).await?)
    }

    /// Validate `body` and store a new hotel.
    pub async fn create(&self, body: &Map<String, Value>) -> Result<Hotel, CoreError> {
        let input = self.validate(body)?;
        let hotel = self.repo.insert(&NewHotel::from(input)).await?;

        tracing::info!(hotel_id = hotel.id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    /// Validate `body`, then overwrite `name` and `address` of hotel `id`.
    ///
    /// Validation runs before the lookup, so an invalid body is rejected
    /// even when the hotel does not exist.
    pub async fn update(
        &self,
        id: i64,
        body: &Map<String, Value>,
    ) -> Result<Option<Hotel>, CoreError> {
        let input = self.validate(body)?;

        let Some(mut hotel) = self.repo.find(id).await? else {
            return Ok(None);
        };

        hotel.apply(input);
        match self.repo.save(&hotel).await {
            Ok(saved) => {
                tracing::info!(hotel_id = id, "Hotel updated");
                Ok(Some(saved))
            }
            // Deleted between lookup and save
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete hotel `id`, returning its last known values.
    pub async fn delete(&self, id: i64) -> Result<Option<Hotel>, CoreError> {
        let Some(hotel) = self.repo.find(id).await? else {
            return Ok(None);
        };

        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(hotel_id = id, "Hotel deleted");
                Ok(Some(hotel))
            }
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Run the hotel rules over `body` and extract the writable fields.
    ///
    /// Fails with `CoreError::Validation` carrying the first failure message.
    pub fn validate(&self, body: &Map<String, Value>) -> Result<HotelInput, CoreError> {
        let validation = self.validator.validate(body, &self.rules);
        if let Some(message) = validation.first_message() {
            tracing::debug!(failures = validation.messages().len(), %message, "Validation failed");
            return Err(CoreError::Validation(message.to_string()));
        }

        HotelInput::from_fields(body)
            .ok_or_else(|| CoreError::Internal("validated body is missing hotel fields".into()))
    }
}
