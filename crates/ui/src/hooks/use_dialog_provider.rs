//! # Dialog Provider Hook
//!
//! Establishes a dialog provider scope for the calling component's subtree.
//!
//! The hook pushes a fresh controller onto the context's scope stack, shares
//! it with descendants through the Dioxus context, and re-renders the calling
//! component whenever the dialog opens or resolves. The scope is released
//! (listeners dropped, dialog hidden) when the component unmounts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! #[component]
//! fn Root() -> Element {
//!     let context = use_hook(|| create_confirmation_dialog_context::<ConfirmDelete>(DialogConfig::default()));
//!     let provider = use_dialog_provider(&context);
//!
//!     rsx! {
//!         Page {}
//!         {provider.modal()}
//!     }
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use dialog_core::{
    DialogContext, DialogController, DialogEvent, OpenConfirmationModal, ProviderScope,
    Subscription,
};

use crate::modal::{DialogModal, ModalHandlers};

// ============================================================================
// Provider Handle
// ============================================================================

/// Render-time view of a provider scope
#[derive(Clone)]
pub struct DialogProvider<M: DialogModal> {
    scope: Rc<ProviderScope<M>>,
    handlers: ModalHandlers<M>,
    /// Bumped on every open/resolve; reading it subscribes the component
    pub revision: u64,
}

impl<M: DialogModal> DialogProvider<M> {
    /// The controller bound to this scope
    pub fn controller(&self) -> &DialogController<M> {
        self.scope.controller()
    }

    /// Whether the modal is currently shown
    pub fn is_visible(&self) -> bool {
        self.controller().is_visible()
    }

    /// `open()` bound to this scope, for use in the providing component itself
    pub fn open_fn(&self) -> OpenConfirmationModal<M> {
        OpenConfirmationModal::Bound(self.controller().clone())
    }

    /// Render the modal while a session is pending, nothing otherwise
    ///
    /// The modal is keyed by session, so a superseding `open()` mounts a
    /// fresh modal instead of reusing the previous session's hook state.
    pub fn modal(&self) -> Element {
        let controller = self.controller();
        let (Some(session), Some(props)) = (controller.session(), controller.props()) else {
            return rsx! {};
        };
        let handlers = self.handlers;

        rsx! {
            for id in std::iter::once(session.id) {
                Fragment { key: "{id}", {props.clone().render(handlers)} }
            }
        }
    }
}

impl<M: DialogModal> PartialEq for DialogProvider<M> {
    fn eq(&self, other: &Self) -> bool {
        self.controller() == other.controller() && self.revision == other.revision
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Establish a provider scope for modal type `M`
pub fn use_dialog_provider<M: DialogModal>(context: &DialogContext<M>) -> DialogProvider<M> {
    let scope = use_hook(|| Rc::new(context.provide()));
    let controller = scope.controller().clone();
    use_context_provider(|| controller.clone());

    let revision = use_signal(|| 0u64);
    use_hook(|| Rc::new(subscribe_revision(&controller, revision)));

    let handlers = use_hook(|| ModalHandlers::for_controller(&controller));

    DialogProvider {
        scope,
        handlers,
        revision: revision(),
    }
}

/// Bump `revision` whenever visibility or props change
fn subscribe_revision<M: DialogModal>(
    controller: &DialogController<M>,
    revision: Signal<u64>,
) -> Subscription {
    controller.subscribe(move |event| match event {
        DialogEvent::Opened { .. } | DialogEvent::Resolved { .. } => {
            let mut revision = revision;
            if let Ok(mut value) = revision.try_write() {
                *value += 1;
            }
        }
        // Torn down while the component unmounts; nothing left to render.
        DialogEvent::TornDown | DialogEvent::Superseded { .. } => {}
    })
}

// ============================================================================
// Tests
// ============================================================================
