//! Command handlers.

pub mod paths;
pub mod serve;
