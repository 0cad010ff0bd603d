//! Search command implementation

use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::ConfigLocations;
use crate::remote::client::RemoteClient;
use anyhow::Result;
use colored::Colorize;

/// Execute the search command
pub fn execute(
    query: String,
    json: bool,
    remote: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;
    let client = RemoteClient::from_config(&config)?;

    let hits = client.search(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{}", format!("No datasets matching '{}'", query).yellow());
        return Ok(());
    }

    for hit in &hits {
        println!(
            "{} {}/{}",
            hit.owner.dimmed(),
            hit.collection.bold(),
            hit.name.cyan()
        );
    }
    println!();
    println!("{} {} result(s)", "✓".green(), hits.len());

    Ok(())
}
