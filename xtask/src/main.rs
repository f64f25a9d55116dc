//! Build tasks for tapseek
//!
//! Usage: `cargo xtask man [--out-dir DIR]`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use tapseek::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for tapseek")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for tapseek and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &std::path::Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_page(out_dir, "tapseek", &cmd)?;

    for sub in cmd.get_subcommands() {
        write_page(out_dir, &format!("tapseek-{}", sub.get_name()), sub)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &std::path::Path, name: &str, cmd: &clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
