//! # Open Dialog Accessor
//!
//! Resolves the `open()` function of the nearest enclosing provider for a
//! modal type. Outside any provider the accessor returns the unbound stub,
//! whose `open()` fails with `DialogError::OutsideProvider`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let open_dialog = use_open_confirmation_dialog::<ConfirmDelete>();
//!
//! let on_delete = move |_| {
//!     match open_dialog.open(ConfirmDelete::new("Delete item?", "This cannot be undone.")) {
//!         Ok(handle) => {
//!             handle.on_confirm(move |_| remove_item(id));
//!         }
//!         Err(e) => tracing::error!("{}", e),
//!     }
//! };
//! ```

use dioxus::prelude::*;
use dialog_core::{DialogController, ModalProps, OpenConfirmationModal};

/// Hook resolving the nearest provider's `open()` for modal type `M`
///
/// Like every hook, call it unconditionally at the top of a component.
pub fn use_open_confirmation_dialog<M: ModalProps>() -> OpenConfirmationModal<M> {
    match try_use_context::<DialogController<M>>() {
        Some(controller) => OpenConfirmationModal::Bound(controller),
        None => OpenConfirmationModal::Unbound,
    }
}

/// Non-hook variant for event handlers and async tasks
///
/// Looks the provider up from the current scope at call time.
pub fn consume_open_confirmation_dialog<M: ModalProps>() -> OpenConfirmationModal<M> {
    match try_consume_context::<DialogController<M>>() {
        Some(controller) => OpenConfirmationModal::Bound(controller),
        None => {
            tracing::debug!(
                modal = M::modal_name(),
                "No dialog provider in scope; returning unbound open()"
            );
            OpenConfirmationModal::Unbound
        }
    }
}
