//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod hotel;

pub use hotel::{Hotel, HotelInput, NewHotel, hotel_rules};
