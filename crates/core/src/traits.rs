//! Core traits for dialog contexts
//!
//! A modal's property contract is split in two: the modal-specific props
//! (the implementing type) and the two completion callbacks, whose payload
//! types are declared here as associated types instead of being inferred.

// ============================================================================
// ModalProps Trait
// ============================================================================

/// Property contract of a modal component
///
/// The implementing type carries everything `open()` passes to the modal
/// except the confirm and dismiss callbacks. Those are owned by the
/// controller; the modal only reports results through them.
///
/// # Example
///
/// ```rust
/// use dialog_core::ModalProps;
///
/// struct DeletePrompt {
///     title: String,
/// }
///
/// enum DismissReason {
///     Cancel,
///     Backdrop,
/// }
///
/// impl ModalProps for DeletePrompt {
///     type Confirm = ();
///     type Dismiss = DismissReason;
/// }
/// ```
pub trait ModalProps: 'static {
    /// Payload the modal may pass when confirmed
    type Confirm: 'static;

    /// Payload the modal may pass when dismissed
    type Dismiss: 'static;

    /// Name used in logs and errors
    fn modal_name() -> &'static str {
        crate::error::short_type_name::<Self>()
    }
}
