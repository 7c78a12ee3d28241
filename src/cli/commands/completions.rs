//! Completions command - print or install a shell completion script

use crate::cli::output::colors;
use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Write the completion script for `shell` to `out`
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "folio", out);
}

fn write_to_file(shell: Shell, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    write_script(shell, &mut file);
    file.flush()
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.output {
        Some(path) => {
            write_to_file(args.shell, &path)?;
            eprintln!(
                "{} {} completions written to {}",
                colors::success("OK"),
                args.shell,
                colors::file_path(&path.display().to_string())
            );
        }
        None => write_script(args.shell, &mut io::stdout()),
    }
    Ok(())
}
