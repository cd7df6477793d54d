//! Configuration loading and management for the attendance engine.
//!
//! This module loads the night allowance and break deduction policy from a
//! YAML file. [`ConfigLoader::default`] gives the fixed company policy
//! without touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Minimum hours: {}", config.allowance_policy().min_effective_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowancePolicy, EngineConfig, ShiftPolicy};
