//! Create command implementation

use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::ConfigLocations;
use crate::core::types::DatasetId;
use crate::remote::client::{CreateOptions, RemoteClient};
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

/// Execute the create command
pub fn execute(
    dataset: String,
    description: Option<String>,
    remote: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;
    let id: DatasetId = dataset.parse()?;

    // The directory name is sent as a path hint for the service listing.
    let path = std::env::current_dir()?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let client = RemoteClient::from_config(&config)?;
    client.create_dataset(
        &id,
        &CreateOptions {
            description,
            path,
            created: Some(Utc::now().to_rfc3339()),
        },
    )?;

    println!("{} Created dataset {}", "✓".green(), id.to_string().cyan());

    Ok(())
}
