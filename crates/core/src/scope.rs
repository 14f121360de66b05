//! Provider scopes
//!
//! [`create_confirmation_dialog_context`] is the factory: it produces a
//! [`DialogContext`] for one modal type. The context keeps an explicit stack
//! of provider scopes. [`DialogContext::provide`] pushes a fresh controller
//! and returns a [`ProviderScope`] guard; the accessor
//! [`DialogContext::open_fn`] resolves the innermost live scope, or the
//! unbound stub when there is none.
//!
//! ```rust
//! use dialog_core::{DialogConfig, ModalProps, create_confirmation_dialog_context};
//!
//! struct Prompt;
//!
//! impl ModalProps for Prompt {
//!     type Confirm = ();
//!     type Dismiss = ();
//! }
//!
//! let context = create_confirmation_dialog_context::<Prompt>(DialogConfig::default());
//! assert!(context.open(Prompt).is_err());
//!
//! let scope = context.provide();
//! context.open(Prompt).unwrap().on_confirm(|_| println!("confirmed"));
//! scope.controller().confirm(None);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::config::DialogConfig;
use crate::controller::{DialogController, OpenHandle};
use crate::error::{DialogError, DialogResult};
use crate::traits::ModalProps;

// ============================================================================
// Factory
// ============================================================================

/// Create the context/provider pair for modal type `P`
pub fn create_confirmation_dialog_context<P: ModalProps>(
    config: DialogConfig,
) -> DialogContext<P> {
    DialogContext {
        inner: Rc::new(ContextInner {
            config,
            stack: RefCell::new(Vec::new()),
        }),
    }
}

// ============================================================================
// DialogContext
// ============================================================================

struct ContextInner<P: ModalProps> {
    config: DialogConfig,
    stack: RefCell<Vec<DialogController<P>>>,
}

/// Scope stack for one modal type
pub struct DialogContext<P: ModalProps> {
    inner: Rc<ContextInner<P>>,
}

impl<P: ModalProps> DialogContext<P> {
    /// Configuration handed to every controller this context creates
    pub fn config(&self) -> &DialogConfig {
        &self.inner.config
    }

    /// Establish a provider scope with a fresh controller
    ///
    /// The scope is live until the returned guard is dropped.
    pub fn provide(&self) -> ProviderScope<P> {
        let controller = DialogController::new(self.inner.config.clone());
        let depth = {
            let mut stack = self.inner.stack.borrow_mut();
            stack.push(controller.clone());
            stack.len()
        };
        debug!(dialog = controller.label(), depth, "Dialog provider scope opened");

        ProviderScope {
            controller,
            context: Rc::downgrade(&self.inner),
        }
    }

    /// Resolve the `open()` function for the innermost live scope
    pub fn open_fn(&self) -> OpenConfirmationModal<P> {
        match self.current() {
            Some(controller) => OpenConfirmationModal::Bound(controller),
            None => OpenConfirmationModal::Unbound,
        }
    }

    /// Open the dialog in the innermost live scope
    pub fn open(&self, props: P) -> DialogResult<OpenHandle<P>> {
        self.open_fn().open(props)
    }

    /// Open the dialog with default props in the innermost live scope
    pub fn open_default(&self) -> DialogResult<OpenHandle<P>>
    where
        P: Default,
    {
        self.open_fn().open_default()
    }

    /// Controller of the innermost live scope
    pub fn current(&self) -> Option<DialogController<P>> {
        self.inner.stack.borrow().last().cloned()
    }

    /// Number of live scopes
    pub fn depth(&self) -> usize {
        self.inner.stack.borrow().len()
    }
}

impl<P: ModalProps> Clone for DialogContext<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: ModalProps> PartialEq for DialogContext<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P: ModalProps> fmt::Debug for DialogContext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogContext")
            .field("modal", &P::modal_name())
            .field("depth", &self.depth())
            .finish()
    }
}

// ============================================================================
// ProviderScope
// ============================================================================

/// A live provider scope; tears its controller down when dropped
pub struct ProviderScope<P: ModalProps> {
    controller: DialogController<P>,
    context: Weak<ContextInner<P>>,
}

impl<P: ModalProps> ProviderScope<P> {
    /// The controller bound to this scope
    pub fn controller(&self) -> &DialogController<P> {
        &self.controller
    }
}

impl<P: ModalProps> Drop for ProviderScope<P> {
    fn drop(&mut self) {
        // Scopes may end out of order; remove this one wherever it sits.
        if let Some(context) = self.context.upgrade() {
            context.stack.borrow_mut().retain(|c| c != &self.controller);
        }
        self.controller.teardown();
    }
}

impl<P: ModalProps> fmt::Debug for ProviderScope<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderScope")
            .field("controller", &self.controller)
            .finish()
    }
}

// ============================================================================
// OpenConfirmationModal
// ============================================================================

/// The `open()` function an accessor resolves to
pub enum OpenConfirmationModal<P: ModalProps> {
    /// Bound to a live provider scope
    Bound(DialogController<P>),
    /// No provider scope; every `open()` fails
    Unbound,
}

impl<P: ModalProps> OpenConfirmationModal<P> {
    /// Open the dialog with `props`
    pub fn open(&self, props: P) -> DialogResult<OpenHandle<P>> {
        match self {
            OpenConfirmationModal::Bound(controller) => Ok(controller.open(props)),
            OpenConfirmationModal::Unbound => Err(DialogError::outside_provider::<P>()),
        }
    }

    /// Open the dialog with default props
    pub fn open_default(&self) -> DialogResult<OpenHandle<P>>
    where
        P: Default,
    {
        self.open(P::default())
    }

    /// Whether a provider scope is bound
    pub fn is_bound(&self) -> bool {
        matches!(self, OpenConfirmationModal::Bound(_))
    }

    /// The bound controller
    pub fn controller(&self) -> Option<&DialogController<P>> {
        match self {
            OpenConfirmationModal::Bound(controller) => Some(controller),
            OpenConfirmationModal::Unbound => None,
        }
    }
}

impl<P: ModalProps> Default for OpenConfirmationModal<P> {
    fn default() -> Self {
        OpenConfirmationModal::Unbound
    }
}

impl<P: ModalProps> Clone for OpenConfirmationModal<P> {
    fn clone(&self) -> Self {
        match self {
            OpenConfirmationModal::Bound(controller) => {
                OpenConfirmationModal::Bound(controller.clone())
            }
            OpenConfirmationModal::Unbound => OpenConfirmationModal::Unbound,
        }
    }
}

impl<P: ModalProps> PartialEq for OpenConfirmationModal<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OpenConfirmationModal::Bound(a), OpenConfirmationModal::Bound(b)) => a == b,
            (OpenConfirmationModal::Unbound, OpenConfirmationModal::Unbound) => true,
            _ => false,
        }
    }
}

impl<P: ModalProps> fmt::Debug for OpenConfirmationModal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenConfirmationModal::Bound(controller) => {
                f.debug_tuple("Bound").field(controller).finish()
            }
            OpenConfirmationModal::Unbound => f.write_str("Unbound"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
