//! Configuration loading for employee dispatch.
//!
//! This module loads the formatter style and a roster of employees from
//! YAML files, for callers that feed the roster to the dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use employee_dispatch::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo").unwrap();
//! println!("Loaded {} employees", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DispatchConfig, RosterConfig};
