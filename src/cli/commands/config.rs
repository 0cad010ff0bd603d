//! Configuration command implementation

use crate::config::resolver::merge_unvalidated;
use crate::config::store::{split_key, ConfigLocations, Configuration};
use crate::core::error::NovaError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the config command
pub fn execute(
    key: Option<String>,
    value: Option<String>,
    global: bool,
    list: bool,
    unset: bool,
    show_origin: bool,
    json: bool,
) -> Result<()> {
    let locations = ConfigLocations::standard()?;

    if show_origin {
        return show_origins(&locations, json);
    }

    if list {
        return list_configuration(&locations, json);
    }

    // Reads see the merged view; writes go to exactly one of the two files,
    // selected by --global (local otherwise).
    let target = if global {
        locations.global_path()
    } else {
        locations.local_path()
    };

    if let Some(key_str) = &key {
        let (section, name) = split_key(key_str)?;

        if unset {
            unset_value(target, key_str, section, name, json)?;
        } else if let Some(value_str) = &value {
            set_value(target, key_str, section, name, value_str, json)?;
        } else {
            get_value(&locations, key_str, section, name, json)?;
        }

        return Ok(());
    }

    // No key specified - show usage
    if json {
        println!(
            "{}",
            serde_json::json!({
                "error": "No configuration key specified",
                "usage": "nova config <section.key> [value] or --list"
            })
        );
    } else {
        println!("{}", "Configuration Management".green().bold());
        println!();
        println!("{}", "Usage:".bold());
        println!("  {} Get value", "nova config <section.key>".cyan());
        println!("  {} Set value", "nova config <section.key> <value>".cyan());
        println!("  {} List all", "nova config --list".cyan());
        println!("  {} Unset value", "nova config --unset <section.key>".cyan());
        println!();
        println!("{}", "Common keys:".bold());
        println!("  {} Base URL of the dataset service", "core.remote".green());
        println!("  {} Authentication token", "core.token".green());
        println!("  {} Default collection", "core.collection".green());
        println!("  {} Default dataset name", "core.name".green());
    }

    Ok(())
}

fn show_origins(locations: &ConfigLocations, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "global": {
                    "path": locations.global_path().display().to_string(),
                    "exists": locations.global_path().exists(),
                },
                "local": {
                    "path": locations.local_path().display().to_string(),
                    "exists": locations.local_path().exists(),
                },
            })
        );
        return Ok(());
    }

    for (tier, path) in [
        ("Global", locations.global_path()),
        ("Local", locations.local_path()),
    ] {
        let status = if path.exists() {
            "exists".green()
        } else {
            "not created yet".yellow()
        };
        println!(
            "{}: {} ({})",
            tier.bold(),
            path.display().to_string().cyan(),
            status
        );
    }

    Ok(())
}

fn list_configuration(locations: &ConfigLocations, json: bool) -> Result<()> {
    let merged = merge_unvalidated(locations)?;
    let entries = merged.entries();

    if json {
        let map: std::collections::BTreeMap<String, String> = entries.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No configuration values set".yellow());
        println!();
        println!("{}", "To set configuration:".bold());
        println!(
            "  {}",
            "nova config --global core.remote \"https://nova.example.com\"".cyan()
        );
        println!("  {}", "nova config --global core.token \"<token>\"".cyan());
        return Ok(());
    }

    for (key, value) in entries {
        println!("{} = {}", key.bold(), value.cyan());
    }

    Ok(())
}

fn get_value(
    locations: &ConfigLocations,
    key_str: &str,
    section: &str,
    name: &str,
    json: bool,
) -> Result<()> {
    let merged = merge_unvalidated(locations)?;

    match merged.get(section, name) {
        Some(value) => {
            if json {
                println!("{}", serde_json::json!({ "key": key_str, "value": value }));
            } else {
                println!("{}", value);
            }
            Ok(())
        },
        None => Err(NovaError::config_key_not_set(key_str).into()),
    }
}

fn set_value(
    target: &Path,
    key_str: &str,
    section: &str,
    name: &str,
    value: &str,
    json: bool,
) -> Result<()> {
    let mut config = Configuration::load(target)?;
    config.set(section, name, value);
    config.write(target)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "action": "set", "key": key_str, "value": value })
        );
    } else {
        println!("{} {} = {}", "✓".green(), key_str.bold(), value.cyan());
    }

    Ok(())
}

fn unset_value(target: &Path, key_str: &str, section: &str, name: &str, json: bool) -> Result<()> {
    let mut config = Configuration::load(target)?;

    if !config.unset(section, name) {
        return Err(NovaError::config_key_not_set(key_str).into());
    }
    config.write(target)?;

    if json {
        println!("{}", serde_json::json!({ "action": "unset", "key": key_str }));
    } else {
        println!("{} Unset {}", "✓".green(), key_str.bold());
    }

    Ok(())
}
