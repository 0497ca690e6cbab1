//! # dir-weight
//!
//! List every entry of the current directory with a human-readable size.
//! Directory sizes are the recursive sum of their contents, and a grand total
//! is printed last.
//!
//! ## Usage
//!
//! ```bash
//! # List the working directory
//! dir-weight
//!
//! # Where the optional config file lives
//! dir-weight config path
//! ```
//!
//! Diagnostics for unreadable entries go to stderr through `env_logger`;
//! `RUST_LOG=debug` additionally traces each directory measured.

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dir_weight::{EntryLister, FileConfig};
use std::process::exit;

/// Entry point for the dir-weight application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    init_logging();

    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Route `log` records to stderr, showing warnings unless `RUST_LOG` says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns an error if the config file is malformed, the working directory
/// cannot be read, or stdout cannot be written to. Per-entry problems are
/// only logged.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = FileConfig::load()?;
    file_config.display_options().apply();

    let lister = EntryLister::current_dir(file_config.scan_options());
    let report = lister.run()?;

    if !report.errors.is_empty() {
        log::warn!("{} entries could not be fully measured", report.errors.len());
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# dir-weight configuration
# All values shown are their defaults. Uncomment and change as needed.

[traversal]
# Follow symbolic links while measuring. Links that loop back to one of
# their ancestors are reported and skipped.
# follow_symlinks = false

[display]
# Colour the FILE/DIR markers and the GB unit (NO_COLOR always disables it)
# color = true
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as TOML-like text, marking values that fell back to defaults.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    format!(
        "\
[traversal]
follow_symlinks = {follow_symlinks}

[display]
color           = {color}",
        follow_symlinks = show_bool(config.traversal.follow_symlinks, false),
        color = show_bool(config.display.color, true),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}
