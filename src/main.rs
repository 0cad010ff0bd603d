//! Nova CLI
//!
//! Command-line client for the Nova dataset hosting service.

use anyhow::Result;
use clap::Parser;
use nova::cli::{commands, Cli, Commands};
use tracing::error;

fn main() {
    let cli = Cli::parse();

    // Initialize logging once, before dispatch; diagnostics go to stderr.
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Every failure path converges here: one logged line, one failure code.
    if let Err(err) = run(cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Config {
            key,
            value,
            global,
            list,
            unset,
            show_origin,
            json,
        } => commands::config::execute(key, value, global, list, unset, show_origin, json),
        Commands::Create {
            dataset,
            description,
            remote,
            token,
        } => commands::create::execute(dataset, description, remote, token),
        Commands::Init {
            dataset,
            remote,
            token,
        } => commands::init::execute(dataset, remote, token),
        Commands::Push {
            dataset,
            remote,
            token,
        } => commands::push::execute(dataset, remote, token),
        Commands::Clone {
            dataset,
            directory,
            remote,
            token,
        } => commands::clone::execute(dataset, directory, remote, token),
        Commands::Search {
            query,
            json,
            remote,
            token,
        } => commands::search::execute(query, json, remote, token),
        Commands::List {
            json,
            remote,
            token,
        } => commands::list::execute(json, remote, token),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}
