//! Config subcommands handler

use anyhow::{Context, Result};

use tapseek::theme::current_theme;
use tapseek::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Catch mistakes right away instead of on the next run
    Config::load_from(&config_path)?.gesture()?;
    println!("{}", theme.success_text("Config is valid."));
    Ok(())
}
