//! # Dialog Hooks
//!
//! Dioxus hooks that bind dialog contexts to the component tree.
//!
//! This module provides:
//! - `use_dialog_provider`: establish a provider scope for a subtree
//! - `use_open_confirmation_dialog`: resolve the nearest provider's `open()`

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_dialog_provider;
pub mod use_open_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_dialog_provider::{DialogProvider, use_dialog_provider};
pub use use_open_dialog::{consume_open_confirmation_dialog, use_open_confirmation_dialog};
