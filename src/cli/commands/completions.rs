//! Shell completions generation.
//!
//! `platgate completions <shell>` writes a completion script to stdout.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "platgate";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Write the script for the configured shell into `out`.
    pub fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("generating {} completions", self.args.shell);
        self.write_to(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn script(shell: Shell) -> String {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell });
        let mut buf = Vec::new();
        cmd.write_to(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_lists_subcommands() {
        let output = script(Shell::Bash);
        assert!(output.contains("platgate"));
        assert!(output.contains("install"));
        assert!(output.contains("resolve"));
    }

    #[test]
    fn zsh_script_mentions_minimal_flag() {
        let output = script(Shell::Zsh);
        assert!(output.contains("--minimal"));
    }

    #[test]
    fn fish_script_names_binary() {
        assert!(script(Shell::Fish).contains("platgate"));
    }
}
