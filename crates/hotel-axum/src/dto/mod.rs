//! Data transfer objects for the HTTP API.
//!
//! These types define the JSON wire format and are kept separate from the
//! domain types in `hotel-core`.

mod envelope;
mod input;

pub use envelope::{EmptyData, Envelope, HotelData, MessageBody};
pub use input::{parse_body, parse_input};
