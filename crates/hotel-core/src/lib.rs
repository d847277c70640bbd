#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{Hotel, HotelInput, NewHotel, hotel_rules};
pub use paths::{DATABASE_PATH_ENV, PathError, data_root, database_path, ensure_parent_dir};
pub use ports::{
    CoreError, HotelRepository, Repos, RepositoryError, Rule, Rules, Validation,
    ValidationMessage, Validator,
};
pub use services::HotelService;
pub use validation::RuleValidator;
