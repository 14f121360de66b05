//! Dialog Context demo
//!
//! Desktop entry point: sets up logging, loads the optional dialog
//! configuration and launches the Dioxus demo.

use std::path::PathBuf;

use anyhow::Context;
use dialog_core::DialogConfig;
use tracing_subscriber::EnvFilter;

/// Config file read from the working directory when `DIALOG_CONFIG` is unset
const DEFAULT_CONFIG_FILE: &str = "dialog.toml";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = load_config()?;
    tracing::debug!(?config, "Dialog configuration");

    dialog_ui::launch_with_config(config);
    Ok(())
}

/// Load `DIALOG_CONFIG`, then `dialog.toml`, then fall back to defaults
fn load_config() -> anyhow::Result<DialogConfig> {
    if let Some(path) = std::env::var_os("DIALOG_CONFIG").map(PathBuf::from) {
        return DialogConfig::load(&path)
            .with_context(|| format!("Failed to load dialog config from {}", path.display()));
    }

    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        tracing::info!("Using {}", fallback.display());
        return DialogConfig::load(&fallback)
            .with_context(|| format!("Failed to load {}", fallback.display()));
    }

    Ok(DialogConfig::default())
}
