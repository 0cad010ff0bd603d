//! Two-tier configuration management for Nova
//!
//! Configuration lives in two INI-style files (global and per-directory)
//! that are merged with command-line overrides into one effective
//! configuration per invocation. See [`store`] for the file format and
//! locations, [`resolver`] for the merge and validation rules.

pub mod resolver;
pub mod store;

// Re-export commonly used items
pub use resolver::{merge_unvalidated, resolve, ConfigOverrides};
pub use store::{local_config_path, ConfigLocations, Configuration, CORE_SECTION};
