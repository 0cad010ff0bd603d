//! Configuration file storage
//!
//! Nova keeps two tiers of configuration, both in the same INI-style
//! (`[section]` / `key = value`) format:
//!
//! - Global: `<platform config dir>/nova/config` (e.g. `~/.config/nova/config`)
//! - Local: `.nova/config` under the working directory of an initialized
//!   dataset
//!
//! Files are loaded fresh from disk on every invocation and written back to
//! exactly one of the two locations.

use crate::core::error::{NovaError, Result};
use directories::BaseDirs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Section holding the keys Nova itself understands
pub const CORE_SECTION: &str = "core";

/// Hidden directory holding the local configuration
pub const LOCAL_CONFIG_DIR: &str = ".nova";

/// File name of the local configuration inside [`LOCAL_CONFIG_DIR`]
pub const LOCAL_CONFIG_FILE: &str = "config";

/// A parsed configuration file: section name → key → string value.
///
/// Section and key lookup is case-sensitive. The `core` section is always
/// present, empty if the file did not contain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// Create an empty configuration with an empty `core` section.
    pub fn new() -> Self {
        let mut sections = IndexMap::new();
        sections.insert(CORE_SECTION.to_string(), IndexMap::new());
        Self { sections }
    }

    /// Load a configuration file.
    ///
    /// A missing file is not an error: it yields an empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let mut config: Configuration = toml::from_str(&content).map_err(|e| {
            NovaError::configuration(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config
            .sections
            .entry(CORE_SECTION.to_string())
            .or_default();

        Ok(config)
    }

    /// Write the configuration to `path`, overwriting any existing file.
    ///
    /// Parent directories are created if missing. The file is fully flushed
    /// and closed before success is reported.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&self.sections).map_err(|e| {
            NovaError::configuration(format!("Failed to serialize configuration: {}", e))
        })?;

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Get a value, `None` if the section or key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(key)
            .map(String::as_str)
    }

    /// Get a value, failing with a configuration error naming the key.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key)
            .ok_or_else(|| NovaError::missing_config_key(key))
    }

    /// Set a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a key. Returns whether the key was present.
    pub fn unset(&mut self, section: &str, key: &str) -> bool {
        self.sections
            .get_mut(section)
            .and_then(|keys| keys.shift_remove(key))
            .is_some()
    }

    /// Get a `core` section value.
    pub fn get_core(&self, key: &str) -> Option<&str> {
        self.get(CORE_SECTION, key)
    }

    /// Get a `core` section value, failing if absent.
    pub fn require_core(&self, key: &str) -> Result<&str> {
        self.require(CORE_SECTION, key)
    }

    /// Set a `core` section value.
    pub fn set_core(&mut self, key: &str, value: &str) {
        self.set(CORE_SECTION, key, value);
    }

    /// Keys of one section, as an iterator of (key, value) pairs.
    pub fn section<'a>(&'a self, section: &str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|keys| keys.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// All values as sorted dotted `section.key` pairs.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .sections
            .iter()
            .flat_map(|(section, keys)| {
                keys.iter()
                    .map(move |(key, value)| (format!("{}.{}", section, key), value.clone()))
            })
            .collect();

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Whether the configuration holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|keys| keys.is_empty())
    }
}

/// Split a dotted `section.key` token into its two parts.
pub fn split_key(key: &str) -> Result<(&str, &str)> {
    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() => Ok((section, name)),
        _ => Err(NovaError::configuration(format!(
            "Invalid configuration key: '{}' (expected section.key)",
            key
        ))),
    }
}

/// The two fixed configuration file locations for one invocation.
#[derive(Debug, Clone)]
pub struct ConfigLocations {
    global: PathBuf,
    local: PathBuf,
}

impl ConfigLocations {
    /// Standard locations: platform config dir for global, the current
    /// working directory for local.
    pub fn standard() -> Result<Self> {
        let base = BaseDirs::new().ok_or(NovaError::HomeDirectoryNotFound)?;
        let global = base.config_dir().join("nova").join("config");
        let local = local_config_path(&std::env::current_dir()?);

        Ok(Self { global, local })
    }

    /// Explicit locations, used by tests.
    pub fn with_paths(global: PathBuf, local: PathBuf) -> Self {
        Self { global, local }
    }

    /// Path of the global configuration file.
    pub fn global_path(&self) -> &Path {
        &self.global
    }

    /// Path of the local configuration file.
    pub fn local_path(&self) -> &Path {
        &self.local
    }
}

/// Path of the local configuration file under `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_DIR).join(LOCAL_CONFIG_FILE)
}

/// The local configuration subpath relative to a dataset root.
///
/// Archive packing excludes every entry with this path as a prefix.
pub fn local_config_subpath() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_DIR).join(LOCAL_CONFIG_FILE)
}
