//! Init command implementation

use crate::cli::commands::write_local_link;
use crate::config::resolver::{resolve, ConfigOverrides};
use crate::config::store::{ConfigLocations, LOCAL_CONFIG_DIR};
use crate::core::types::DatasetId;
use anyhow::Result;
use colored::Colorize;

/// Execute the init command
pub fn execute(dataset: String, remote: Option<String>, token: Option<String>) -> Result<()> {
    let id: DatasetId = dataset.parse()?;

    let locations = ConfigLocations::standard()?;
    let config = resolve(&locations, &ConfigOverrides::remote_token(remote, token))?;

    let cwd = std::env::current_dir()?;
    write_local_link(&cwd, &config, &id)?;

    println!(
        "{} Linked {} to dataset {}",
        "✓".green(),
        cwd.display().to_string().cyan(),
        id.to_string().cyan()
    );
    println!(
        "  {} Configuration written to {}/config",
        "→".cyan(),
        LOCAL_CONFIG_DIR
    );

    Ok(())
}
