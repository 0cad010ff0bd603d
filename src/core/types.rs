//! Core types for Nova

use crate::core::error::{NovaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a dataset on the remote service: a (collection, name) pair
/// written as a single `collection/name` token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId {
    /// Collection the dataset belongs to
    pub collection: String,
    /// Dataset name within the collection
    pub name: String,
}

impl DatasetId {
    /// Create a dataset identifier from its two components.
    ///
    /// Both components must be non-empty.
    pub fn new(collection: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let collection = collection.into();
        let name = name.into();

        if collection.is_empty() || name.is_empty() {
            return Err(NovaError::invalid_dataset_id(format!(
                "{}/{}",
                collection, name
            )));
        }

        Ok(Self { collection, name })
    }
}

impl FromStr for DatasetId {
    type Err = NovaError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(collection), Some(name), None) if !collection.is_empty() && !name.is_empty() => {
                Ok(Self {
                    collection: collection.to_string(),
                    name: name.to_string(),
                })
            },
            _ => Err(NovaError::invalid_dataset_id(s)),
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_identifier() {
        let id: DatasetId = "climate/sea-surface-temps".parse().unwrap();
        assert_eq!(id.collection, "climate");
        assert_eq!(id.name, "sea-surface-temps");
        assert_eq!(id.to_string(), "climate/sea-surface-temps");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let result: Result<DatasetId> = "collname".parse();
        assert!(matches!(result, Err(NovaError::InvalidDatasetId { .. })));
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        let result: Result<DatasetId> = "a/b/c".parse();
        assert!(matches!(result, Err(NovaError::InvalidDatasetId { .. })));
    }

    #[test]
    fn test_parse_rejects_empty_components() {
        assert!("/name".parse::<DatasetId>().is_err());
        assert!("coll/".parse::<DatasetId>().is_err());
        assert!("/".parse::<DatasetId>().is_err());
        assert!("".parse::<DatasetId>().is_err());
    }

    #[test]
    fn test_new_rejects_empty_components() {
        assert!(DatasetId::new("", "name").is_err());
        assert!(DatasetId::new("coll", "").is_err());
        assert!(DatasetId::new("coll", "name").is_ok());
    }
}
