//! Configuration module
//!
//! This module contains components for loading and validating configuration.

pub mod deserializer;
pub mod loader;
mod model;

pub use deserializer::expand_path;
pub use loader::{load_config, load_config_for_testing, read_or_create};
pub use model::Config;
