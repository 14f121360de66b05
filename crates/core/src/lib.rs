//! # Dialog Core
//!
//! Renderer-agnostic confirmation dialog state.
//!
//! This crate provides the open/confirm/dismiss protocol around a modal
//! component, independent of how the modal is drawn:
//!
//! - **Controller**: visibility, pending props, confirm/dismiss listener sets
//! - **Scopes**: the `create_confirmation_dialog_context` factory and the
//!   explicit provider scope stack it manages
//! - **Observers**: state change notifications for view layers
//! - **Config & Errors**: `DialogConfig` and `DialogError` / `DialogResult`
//!

pub mod config;
pub mod controller;
pub mod error;
pub mod listener;
pub mod observer;
pub mod scope;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DialogConfig, PanicPolicy};
pub use controller::{DialogController, OpenHandle};
pub use error::{DialogError, DialogResult, ResultExt};
pub use listener::{Listener, ListenerSet};
pub use observer::Subscription;
pub use scope::{
    DialogContext, OpenConfirmationModal, ProviderScope, create_confirmation_dialog_context,
};
pub use traits::ModalProps;
pub use types::{
    ControllerId, DialogEvent, DialogStatus, ListenerCounts, Resolution, ResolutionKind,
    ResolveReport, SessionId, SessionInfo,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
