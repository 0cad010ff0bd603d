//! Effective configuration resolution
//!
//! One command invocation works against a single merged configuration built
//! from three sources, later sources overwriting same-keyed values from
//! earlier ones:
//!
//! 1. the global file
//! 2. the local file
//! 3. command-line overrides
//!
//! Validation happens here, once, before any network or filesystem side
//! effect: `core.remote` and `core.token` must both be present after the
//! merge.

use crate::config::store::{ConfigLocations, Configuration, CORE_SECTION};
use crate::core::error::{NovaError, Result};
use tracing::debug;

/// Keys that must be present in `core` after the merge
pub const REQUIRED_KEYS: [&str; 2] = ["remote", "token"];

/// Override values sourced from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Base URL of the dataset service
    pub remote: Option<String>,
    /// Bearer token for authentication
    pub token: Option<String>,
    /// Default collection
    pub collection: Option<String>,
    /// Default dataset name
    pub name: Option<String>,
}

impl ConfigOverrides {
    /// Overrides carrying only the remote/token pair shared by every
    /// network command.
    pub fn remote_token(remote: Option<String>, token: Option<String>) -> Self {
        Self {
            remote,
            token,
            ..Default::default()
        }
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("remote", self.remote.as_deref()),
            ("token", self.token.as_deref()),
            ("collection", self.collection.as_deref()),
            ("name", self.name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// Merge global, local, and override configuration into the effective
/// configuration for this invocation.
pub fn resolve(locations: &ConfigLocations, overrides: &ConfigOverrides) -> Result<Configuration> {
    let global = Configuration::load(locations.global_path())?;
    let local = Configuration::load(locations.local_path())?;

    let mut effective = Configuration::new();
    for (key, value) in global.section(CORE_SECTION) {
        effective.set_core(key, value);
    }
    for (key, value) in local.section(CORE_SECTION) {
        effective.set_core(key, value);
    }
    for (key, value) in overrides.entries() {
        effective.set_core(key, value);
    }

    for key in REQUIRED_KEYS {
        if effective.get_core(key).is_none() {
            return Err(NovaError::missing_config_key(key));
        }
    }

    debug!(
        remote = effective.get_core("remote"),
        "resolved configuration"
    );

    Ok(effective)
}

/// Merge without validating required keys.
///
/// Used by read-only configuration inspection, which must work before
/// `remote`/`token` have been set anywhere.
pub fn merge_unvalidated(locations: &ConfigLocations) -> Result<Configuration> {
    let global = Configuration::load(locations.global_path())?;
    let local = Configuration::load(locations.local_path())?;

    let mut merged = global;
    for (key, value) in local.section(CORE_SECTION) {
        merged.set_core(key, value);
    }

    Ok(merged)
}
