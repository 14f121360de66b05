//! # Renderable Modals
//!
//! A [`DialogModal`] is a [`ModalProps`] type that knows how to draw itself.
//! The provider hands it a [`ModalHandlers`] pair wired to its controller;
//! the modal calls one of them exactly once to report the user's decision.

use dioxus::prelude::*;
use dialog_core::{DialogController, ModalProps};

// ============================================================================
// DialogModal Trait
// ============================================================================

/// A modal component that can be driven by a dialog provider
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, PartialEq)]
/// struct Prompt { question: String }
///
/// impl ModalProps for Prompt {
///     type Confirm = ();
///     type Dismiss = ();
/// }
///
/// impl DialogModal for Prompt {
///     fn render(self, handlers: ModalHandlers<Self>) -> Element {
///         rsx! {
///             p { "{self.question}" }
///             button { onclick: move |_| handlers.on_confirm.call(None), "Yes" }
///             button { onclick: move |_| handlers.on_dismiss.call(None), "No" }
///         }
///     }
/// }
/// ```
pub trait DialogModal: ModalProps + Clone + PartialEq {
    /// Render the modal with the pending props
    fn render(self, handlers: ModalHandlers<Self>) -> Element;
}

// ============================================================================
// Modal Handlers
// ============================================================================

/// The two completion callbacks reserved by the provider
pub struct ModalHandlers<M: ModalProps> {
    /// Confirm the pending session
    pub on_confirm: EventHandler<Option<M::Confirm>>,
    /// Dismiss the pending session
    pub on_dismiss: EventHandler<Option<M::Dismiss>>,
}

impl<M: ModalProps> ModalHandlers<M> {
    /// Handlers that resolve `controller`
    ///
    /// Must be called inside a Dioxus scope; the handlers live as long as it.
    pub fn for_controller(controller: &DialogController<M>) -> Self {
        let confirm = controller.clone();
        let dismiss = controller.clone();

        Self {
            on_confirm: EventHandler::new(move |result: Option<M::Confirm>| {
                confirm.confirm(result);
            }),
            on_dismiss: EventHandler::new(move |result: Option<M::Dismiss>| {
                dismiss.dismiss(result);
            }),
        }
    }
}

impl<M: ModalProps> Clone for ModalHandlers<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ModalProps> Copy for ModalHandlers<M> {}

impl<M: ModalProps> PartialEq for ModalHandlers<M> {
    fn eq(&self, other: &Self) -> bool {
        self.on_confirm == other.on_confirm && self.on_dismiss == other.on_dismiss
    }
}
