//! # Confirm Delete Dialog Component
//!
//! Modal for confirming destructive delete operations.
//!
//! ## Features
//!
//! - Shows what will be deleted and what will be deleted along with it
//! - Optionally requires typing "delete" before the button enables
//! - Reports how the dialog was dismissed (`DismissReason`)
//!

use dioxus::prelude::*;
use dialog_core::ModalProps;
use serde::{Deserialize, Serialize};

use super::overlay::{DialogOverlay, OverlayExit};
use crate::modal::{DialogModal, ModalHandlers};

/// Word the user must type when typed confirmation is required
pub const CONFIRM_WORD: &str = "delete";

// ============================================================================
// Modal Props
// ============================================================================

/// What to show in the delete confirmation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmDelete {
    /// Dialog heading
    pub title: String,
    /// Explanation below the heading
    pub message: String,
    /// Name of the item being deleted
    pub item_name: Option<String>,
    /// Other things removed by this deletion
    pub cascading: Vec<String>,
    /// Require typing [`CONFIRM_WORD`] before deleting
    pub require_typed_confirmation: bool,
}

impl ConfirmDelete {
    /// Create props with a title and message
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Name the item being deleted
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    /// Add a cascading deletion line, e.g. "3 relationships"
    pub fn with_cascading(mut self, info: impl Into<String>) -> Self {
        self.cascading.push(info.into());
        self
    }

    /// Require typed confirmation
    pub fn requiring_typed_confirmation(mut self) -> Self {
        self.require_typed_confirmation = true;
        self
    }

    /// Whether `input` unlocks the delete button
    pub fn accepts(&self, input: &str) -> bool {
        !self.require_typed_confirmation || input.trim().eq_ignore_ascii_case(CONFIRM_WORD)
    }
}

/// Why the user backed out of the deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissReason {
    /// Cancel button
    Cancel,
    /// Click outside the dialog
    Backdrop,
    /// Escape key
    Escape,
}

impl DismissReason {
    /// Get the display name for this reason
    pub fn display_name(&self) -> &'static str {
        match self {
            DismissReason::Cancel => "cancelled",
            DismissReason::Backdrop => "closed",
            DismissReason::Escape => "escaped",
        }
    }
}

impl From<OverlayExit> for DismissReason {
    fn from(exit: OverlayExit) -> Self {
        match exit {
            OverlayExit::Backdrop => DismissReason::Backdrop,
            OverlayExit::Escape => DismissReason::Escape,
        }
    }
}

impl ModalProps for ConfirmDelete {
    type Confirm = ();
    type Dismiss = DismissReason;
}

impl DialogModal for ConfirmDelete {
    fn render(self, handlers: ModalHandlers<Self>) -> Element {
        rsx! {
            ConfirmDeleteDialog {
                prompt: self,
                on_confirm: handlers.on_confirm,
                on_dismiss: handlers.on_dismiss,
            }
        }
    }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// What is being deleted
    pub prompt: ConfirmDelete,

    /// Called once the deletion is confirmed
    pub on_confirm: EventHandler<Option<()>>,

    /// Called when the dialog is dismissed
    pub on_dismiss: EventHandler<Option<DismissReason>>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut confirm_text = use_signal(String::new);

    // Re-evaluated every render; reading the signal subscribes to edits.
    let can_delete = props.prompt.accepts(&confirm_text.read());

    let on_confirm = props.on_confirm;
    let on_dismiss = props.on_dismiss;

    let handle_delete = move |_| {
        if can_delete {
            on_confirm.call(None);
        }
    };

    let ConfirmDelete {
        title,
        message,
        item_name,
        cascading,
        require_typed_confirmation,
    } = props.prompt;

    rsx! {
        DialogOverlay {
            on_exit: move |exit: OverlayExit| on_dismiss.call(Some(exit.into())),

            div {
                class: "confirm-delete-dialog p-6",

                // Header with warning icon
                div {
                    class: "flex items-start gap-4 mb-6",

                    div {
                        class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-500/20 flex items-center justify-center",
                        span { class: "text-2xl", "⚠️" }
                    }

                    div {
                        class: "flex-1",
                        h2 {
                            class: "text-xl font-bold text-red-400 mb-2",
                            "{title}"
                        }
                        p {
                            class: "text-slate-300",
                            "{message}"
                        }
                    }
                }

                // Item being deleted
                if let Some(name) = item_name {
                    div {
                        class: "mb-4 p-3 bg-slate-700/50 rounded-lg border border-slate-600",
                        div {
                            class: "flex items-center gap-2",
                            span { class: "text-slate-400", "Item:" }
                            span { class: "font-medium text-white", "{name}" }
                        }
                    }
                }

                // Cascading deletion warning
                if !cascading.is_empty() {
                    div {
                        class: "mb-4 p-3 bg-amber-500/10 border border-amber-500/30 rounded-lg",
                        div {
                            class: "flex items-start gap-2",
                            span { class: "text-amber-400", "⚠" }
                            div {
                                class: "text-sm text-amber-300",
                                p { class: "font-medium mb-1", "This will also delete:" }
                                ul {
                                    class: "list-disc list-inside text-amber-200/80",
                                    for info in cascading.iter() {
                                        li { "{info}" }
                                    }
                                }
                            }
                        }
                    }
                }

                // Typed confirmation
                if require_typed_confirmation {
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-slate-400 mb-2",
                            "Type \"{CONFIRM_WORD}\" to confirm:"
                        }
                        input {
                            class: "w-full px-3 py-2 bg-slate-700 border border-slate-600 rounded-lg focus:outline-none focus:border-red-500 text-white",
                            r#type: "text",
                            placeholder: CONFIRM_WORD,
                            value: "{confirm_text}",
                            oninput: move |e| confirm_text.set(e.value()),
                        }
                    }
                }

                // Actions
                div {
                    class: "flex justify-end gap-3",

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                        onclick: move |_| on_dismiss.call(Some(DismissReason::Cancel)),
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-red-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                        disabled: !can_delete,
                        onclick: handle_delete,
                        span { "🗑️" }
                        "Delete"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
