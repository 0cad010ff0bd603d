//! CLI command implementations

pub mod clone;
pub mod completion;
pub mod config;
pub mod create;
pub mod init;
pub mod list;
pub mod push;
pub mod search;

// Common utilities for commands
use crate::config::store::{local_config_path, Configuration};
use crate::core::types::DatasetId;
use anyhow::Result;
use std::path::Path;

/// Determine the dataset identifier from an explicit argument, falling back
/// to the resolved configuration's `collection`/`name` pair.
pub(crate) fn dataset_from_arg_or_config(
    arg: Option<&str>,
    config: &Configuration,
) -> Result<DatasetId> {
    if let Some(token) = arg {
        return Ok(token.parse()?);
    }

    match (config.get_core("collection"), config.get_core("name")) {
        (Some(collection), Some(name)) => Ok(DatasetId::new(collection, name)?),
        _ => Err(anyhow::anyhow!(
            "No dataset specified: pass collection/name or run 'nova init' first"
        )),
    }
}

/// Write the local configuration linking `dir` to a dataset.
///
/// The link carries the resolved remote and token together with the dataset
/// identifier, so the directory is immediately usable for push/clone.
pub(crate) fn write_local_link(
    dir: &Path,
    effective: &Configuration,
    id: &DatasetId,
) -> Result<()> {
    let mut local = Configuration::new();
    local.set_core("remote", effective.require_core("remote")?);
    local.set_core("token", effective.require_core("token")?);
    local.set_core("collection", &id.collection);
    local.set_core("name", &id.name);
    local.write(&local_config_path(dir))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_explicit_argument() {
        let config = Configuration::new();
        let id = dataset_from_arg_or_config(Some("climate/temps"), &config).unwrap();
        assert_eq!(id.to_string(), "climate/temps");
    }

    #[test]
    fn test_dataset_from_configuration() {
        let mut config = Configuration::new();
        config.set_core("collection", "climate");
        config.set_core("name", "temps");

        let id = dataset_from_arg_or_config(None, &config).unwrap();
        assert_eq!(id.to_string(), "climate/temps");
    }

    #[test]
    fn test_dataset_missing_everywhere() {
        let config = Configuration::new();
        let err = dataset_from_arg_or_config(None, &config).unwrap_err();
        assert!(err.to_string().contains("nova init"));
    }

    #[test]
    fn test_argument_beats_configuration() {
        let mut config = Configuration::new();
        config.set_core("collection", "climate");
        config.set_core("name", "temps");

        let id = dataset_from_arg_or_config(Some("other/set"), &config).unwrap();
        assert_eq!(id.to_string(), "other/set");
    }
}
