//! The `{message, data}` response envelope.

use hotel_core::Hotel;
use serde::{Deserialize, Serialize};

/// Wrapper used by every successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyData {}

/// Payload of single-hotel responses: the hotel, or `{}` when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelData {
    Hotel(Hotel),
    Empty(EmptyData),
}

impl HotelData {
    /// The `{}` payload used when no hotel matched.
    pub const fn missing() -> Self {
        Self::Empty(EmptyData {})
    }
}

/// Body of error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_data_serializes_as_empty_object() {
        let envelope = Envelope::new("Hotel with id 3 is not found", HotelData::missing());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "message": "Hotel with id 3 is not found", "data": {} })
        );
    }
}
