//! # UI Components
//!
//! Reusable Dioxus components for confirmation dialogs.
//!
//! ## Component Hierarchy
//!
//! ```text
//! DialogOverlay (backdrop + centered panel)
//! └── ConfirmDeleteDialog
//!     ├── Header (icon, title, message)
//!     ├── Item / cascading warning
//!     ├── Typed confirmation input (optional)
//!     └── Actions (Cancel / Delete)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{ConfirmDelete, ConfirmDeleteDialog, DialogOverlay, DismissReason};
