//! Core services that orchestrate domain operations via ports.

mod hotel_service;

pub use hotel_service::HotelService;
