//! Shell completion command implementation

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Execute the completion command
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "nova", &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_generation() {
        let shells = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

        for shell in shells {
            let mut cmd = Cli::command();
            let mut output = Vec::new();
            generate(shell, &mut cmd, "nova", &mut output);

            assert!(
                !output.is_empty(),
                "No completion script generated for {:?}",
                shell
            );
        }
    }
}
