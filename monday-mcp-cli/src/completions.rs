use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

const BIN_NAME: &str = "monday-mcp";

/// Write the completion script for `shell` to `out`
pub fn write_completion<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}

/// Print shell completion script to stdout
pub fn print_completion(shell: Shell) -> Result<()> {
    write_completion(shell, &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let mut buf = Vec::new();
        write_completion(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains(BIN_NAME));
        for sub in ["serve", "tools", "call", "completion"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }
}
