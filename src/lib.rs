//! FA2MS - catalog and filter engine for asphalt aging-simulation methods

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod server;

pub use error::{Fa2msError, Result};
