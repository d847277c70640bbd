//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `HotelService` and shape
//! the result into the response envelope.

pub mod hotels;
