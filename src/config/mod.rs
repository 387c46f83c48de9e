//! Configuration loading and management for the projection engine.
//!
//! This module provides functionality to load the employer-policy
//! configuration from a YAML file, validating required keys individually.
//!
//! # Example
//!
//! ```no_run
//! use contrib_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./employee.yaml").unwrap();
//! println!("Bonus deferral rate: {}", config.bonus_pretax_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeConfig, RawEmployeeConfig};
