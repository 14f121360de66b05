//! # Dialog Components
//!
//! Modal components that plug into a dialog provider.
//!
//! ## Dialogs
//!
//! - **DialogOverlay**: Backdrop and panel shared by every modal
//! - **ConfirmDeleteDialog**: Confirmation for destructive actions, driven by
//!   the `ConfirmDelete` props type
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dialog_ui::components::dialogs::ConfirmDelete;
//!
//! let open_dialog = use_open_confirmation_dialog::<ConfirmDelete>();
//! open_dialog
//!     .open(ConfirmDelete::new("Delete entity?", "This cannot be undone.").with_item("User"))?
//!     .on_confirm(|_| tracing::info!("deleted"))
//!     .on_dismiss(|reason| tracing::debug!(?reason, "kept"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod overlay;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::{ConfirmDelete, ConfirmDeleteDialog, DismissReason};
pub use overlay::DialogOverlay;
