//! Nova - command-line client for a dataset hosting service
//!
//! Nova moves whole directory snapshots to and from a remote dataset
//! service: it creates, pushes, clones, searches, and lists datasets
//! grouped in collections, authenticating with a bearer token. Two tiers of
//! configuration (a global per-user file and a per-directory `.nova/config`)
//! are merged with command-line overrides into one effective configuration
//! per invocation.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use nova::config::{resolve, ConfigLocations, ConfigOverrides};
//! use nova::remote::RemoteClient;
//! use nova::DatasetId;
//!
//! let locations = ConfigLocations::standard()?;
//! let config = resolve(&locations, &ConfigOverrides::default())?;
//!
//! let client = RemoteClient::from_config(&config)?;
//! let id: DatasetId = "climate/sea-surface-temps".parse()?;
//! let snapshot = nova::archive::pack(std::path::Path::new("."))?;
//! client.push_data(&id, snapshot)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
pub mod remote;

// Re-export commonly used types
pub use crate::config::store::Configuration;
pub use crate::core::error::{NovaError, Result};
pub use crate::core::types::DatasetId;
pub use crate::remote::client::RemoteClient;

/// Current version of Nova
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
