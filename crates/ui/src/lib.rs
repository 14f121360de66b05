//! # Dialog UI
//!
//! Dioxus binding for `dialog_core` confirmation dialogs.
//!
//! This crate turns a renderer-agnostic dialog context into components and
//! hooks:
//!
//! ## Features
//!
//! - `use_dialog_provider`: provider scope for a component subtree
//! - `use_open_confirmation_dialog`: accessor for descendants
//! - `DialogModal`: trait for modals the provider can render
//! - `ConfirmDeleteDialog`: stock destructive-action modal
//! - A desktop demo app (`launch`)
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod modal;
pub mod state;

use std::sync::OnceLock;

use dialog_core::DialogConfig;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export the core crate for convenience
pub use dialog_core;

pub use app::App;
pub use components::{ConfirmDelete, ConfirmDeleteDialog, DialogOverlay, DismissReason};
pub use hooks::{
    DialogProvider, consume_open_confirmation_dialog, use_dialog_provider,
    use_open_confirmation_dialog,
};
pub use modal::{DialogModal, ModalHandlers};
pub use state::{DemoItem, DemoState, StatusLevel, StatusMessage};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Dialog Demo";

/// Application display title
pub const TITLE: &str = "Dialog Demo - Confirmation Dialogs";

/// CSS styles for the demo application
const STYLES: &str = include_str!("../assets/dialog.css");

/// Dialog configuration chosen at launch
static DIALOG_CONFIG: OnceLock<DialogConfig> = OnceLock::new();

/// Configuration for dialogs created by the demo app
pub fn dialog_config() -> DialogConfig {
    DIALOG_CONFIG.get().cloned().unwrap_or_default()
}

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the demo desktop application with default dialog configuration
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     dialog_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(DialogConfig::default());
}

/// Launch the demo desktop application
///
/// The configuration is fixed for the lifetime of the process; later calls
/// keep the first one.
pub fn launch_with_config(config: DialogConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    if DIALOG_CONFIG.set(config).is_err() {
        tracing::warn!("Dialog configuration already set; keeping the first one");
    }

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 640.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 360.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(get_styles().contains(".dialog-overlay"));
    }

    #[test]
    fn test_styles_define_component_utilities() {
        let used = [
            "bg-slate-800",
            "bg-black\\/50",
            "gap-4",
            "text-red-400",
            "text-green-400",
            "max-w-lg",
            "w-full",
            "rounded-lg",
            "hover\\:bg-red-700:hover",
            "disabled\\:bg-red-600\\/50:disabled",
            "focus\\:border-red-500:focus",
        ];
        for class in used {
            assert!(
                STYLES.contains(&format!(".{} ", class)),
                "missing utility class: {}",
                class
            );
        }
    }

    #[test]
    fn test_dialog_config_defaults_before_launch() {
        assert_eq!(dialog_config(), DialogConfig::default());
    }
}
