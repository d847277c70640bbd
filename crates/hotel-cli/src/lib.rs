//! Command-line interface for the hotel API.
//!
//! Argument definitions live here so they can be tested without starting
//! a server; `main.rs` is the composition root that dispatches them.

#![deny(unused_crate_dependencies)]

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;

// Used only by the binary
use dotenvy as _;
use tokio as _;
