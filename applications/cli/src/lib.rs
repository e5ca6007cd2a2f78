//! Beatlist CLI Library
//!
//! Configuration and output rendering for the `beatlist` binary, exposed
//! for testing.

pub mod config;
pub mod error;
pub mod report;

pub use config::CliConfig;
pub use error::{CliError, Result};
