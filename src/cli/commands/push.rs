//! Push command implementation

use crate::archive;
use crate::cli::commands::dataset_from_arg_or_config;
use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::ConfigLocations;
use crate::remote::client::RemoteClient;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Execute the push command
pub fn execute(
    dataset: Option<String>,
    remote: Option<String>,
    token: Option<String>,
) -> Result<()> {
    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;
    let id = dataset_from_arg_or_config(dataset.as_deref(), &config)?;
    let client = RemoteClient::from_config(&config)?;

    let root = std::env::current_dir()?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    progress.set_message(format!("Packing {}...", root.display()));
    let bytes = archive::pack(&root)?;
    let size = bytes.len();

    progress.set_message(format!("Uploading to {}...", id));
    client.push_data(&id, bytes)?;

    progress.finish_and_clear();
    println!(
        "{} Pushed {} ({} bytes)",
        "✓".green(),
        id.to_string().cyan(),
        size
    );

    Ok(())
}
