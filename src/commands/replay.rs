//! Replay command handler

use std::path::Path;

use anyhow::{Context, Result};

use tapseek::replay::replay;
use tapseek::script::GestureScript;
use tapseek::theme::current_theme;
use tapseek::Config;

/// Replay a gesture script and print the transcript.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, json: bool, config: &Config) -> Result<()> {
    let script = GestureScript::parse(file)?;
    let entries = replay(&script, config.gesture()?)?;

    if json {
        for entry in &entries {
            println!(
                "{}",
                serde_json::to_string(entry).context("Failed to serialize transcript entry")?
            );
        }
        return Ok(());
    }

    let theme = current_theme();
    let title = script
        .header
        .title
        .clone()
        .unwrap_or_else(|| file.display().to_string());
    println!("{}", theme.accent_text(&title));
    for entry in &entries {
        println!("{}", theme.primary_text(&entry.to_line()));
    }
    println!(
        "{}",
        theme.secondary_text(&format!(
            "{} event(s), {} transcript line(s)",
            script.events.len(),
            entries.len()
        ))
    );
    Ok(())
}
