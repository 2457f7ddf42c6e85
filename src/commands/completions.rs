//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, fs as fs_error};

/// Print the completion script for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let script = completion_script(args.shell)?;
    std::io::stdout()
        .lock()
        .write_all(&script)
        .map_err(|e| fs_error::io_error(format!("Failed to write completions: {e}")))
}

/// Completion script for `shell`, rendered in memory
fn completion_script(shell: Shell) -> Result<Vec<u8>> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut script);
    if script.is_empty() {
        return Err(fs_error::io_error(format!("No completions generated for {shell}")));
    }
    Ok(script)
}
