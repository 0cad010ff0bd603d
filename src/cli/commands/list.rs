//! List command implementation

use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::ConfigLocations;
use crate::remote::client::RemoteClient;
use anyhow::Result;
use colored::Colorize;

/// Execute the list command
pub fn execute(json: bool, remote: Option<String>, token: Option<String>) -> Result<()> {
    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;
    let client = RemoteClient::from_config(&config)?;

    let datasets = client.list_datasets()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }

    if datasets.is_empty() {
        println!("{}", "No datasets found".yellow());
        return Ok(());
    }

    for dataset in &datasets {
        match (&dataset.collection, &dataset.description) {
            (Some(collection), Some(description)) => println!(
                "{}/{} - {}",
                collection.bold(),
                dataset.name.cyan(),
                description.dimmed()
            ),
            (Some(collection), None) => println!("{}/{}", collection.bold(), dataset.name.cyan()),
            (None, Some(description)) => {
                println!("{} - {}", dataset.name.cyan(), description.dimmed())
            },
            (None, None) => println!("{}", dataset.name.cyan()),
        }
    }

    Ok(())
}
