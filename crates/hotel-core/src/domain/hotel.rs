//! Hotel domain types.
//!
//! These types represent hotels in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ports::{Rule, Rules};

// ─────────────────────────────────────────────────────────────────────────────
// Hotel Types
// ─────────────────────────────────────────────────────────────────────────────

/// A hotel that exists in the system with a database ID.
///
/// Use `NewHotel` for hotels that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Database ID of the hotel (always present for persisted hotels).
    pub id: i64,
    /// Display name of the hotel.
    pub name: String,
    /// Street address of the hotel.
    pub address: String,
    /// UTC timestamp of when the hotel was first stored.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last save.
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Overwrite the writable fields with the given input.
    ///
    /// `id` and the timestamps are left alone; the repository refreshes
    /// `updated_at` on save.
    pub fn apply(&mut self, input: HotelInput) {
        self.name = input.name;
        self.address = input.address;
    }
}

/// A hotel to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns a `Hotel` with the assigned ID
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHotel {
    /// Display name of the hotel.
    pub name: String,
    /// Street address of the hotel.
    pub address: String,
}

impl From<HotelInput> for NewHotel {
    fn from(input: HotelInput) -> Self {
        Self {
            name: input.name,
            address: input.address,
        }
    }
}

/// The writable fields of a hotel, extracted from a request body.
///
/// Only `name` and `address` are read. Any other keys in the body are
/// ignored so clients cannot write columns they do not own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelInput {
    pub name: String,
    pub address: String,
}

impl HotelInput {
    /// Extract the allow-listed fields from a request body.
    ///
    /// Returns `None` if either field is missing or not a string. Callers
    /// run the body through [`hotel_rules`] first, so `None` only happens
    /// when validation was skipped.
    pub fn from_fields(data: &Map<String, Value>) -> Option<Self> {
        let field = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Self {
            name: field("name")?,
            address: field("address")?,
        })
    }
}

/// Validation rules applied to hotel request bodies on create and update.
pub fn hotel_rules() -> Rules {
    Rules::new()
        .field("name", [Rule::Required, Rule::String])
        .field("address", [Rule::Required, Rule::String])
}
