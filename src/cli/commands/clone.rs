//! Clone command implementation

use crate::archive;
use crate::cli::commands::write_local_link;
use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::ConfigLocations;
use crate::core::types::DatasetId;
use crate::remote::client::RemoteClient;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Execute the clone command
pub fn execute(
    dataset: String,
    directory: Option<PathBuf>,
    remote: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let id: DatasetId = dataset.parse()?;

    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;
    let client = RemoteClient::from_config(&config)?;

    let dest = directory.unwrap_or_else(|| PathBuf::from(&id.name));
    if dest.exists() && dest.read_dir()?.next().is_some() {
        return Err(anyhow::anyhow!(
            "Destination directory is not empty: {}",
            dest.display()
        ));
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    progress.set_message(format!("Downloading {}...", id));
    let bytes = client.clone_data(&id)?;

    progress.set_message(format!("Unpacking into {}...", dest.display()));
    archive::unpack(&bytes, &dest)?;
    write_local_link(&dest, &config, &id)?;

    progress.finish_and_clear();
    println!(
        "{} Cloned {} into {}",
        "✓".green(),
        id.to_string().cyan(),
        dest.display().to_string().cyan()
    );

    Ok(())
}
