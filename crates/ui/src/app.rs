//! Demo Application Component
//!
//! A list of items with delete buttons. Every delete goes through the
//! `ConfirmDelete` dialog provided at the root.

use dioxus::prelude::*;
use dialog_core::create_confirmation_dialog_context;

use crate::components::{ConfirmDelete, DismissReason};
use crate::hooks::{use_dialog_provider, use_open_confirmation_dialog};
use crate::state::{DemoItem, DemoState, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let context =
        use_hook(|| create_confirmation_dialog_context::<ConfirmDelete>(crate::dialog_config()));
    let provider = use_dialog_provider(&context);
    use_context_provider(|| Signal::new(DemoState::sample()));

    use_effect(|| {
        tracing::info!("Dialog demo UI initialized");
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            header {
                class: "toolbar h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 shrink-0",
                span { class: "font-semibold", {crate::TITLE} }
            }

            main {
                class: "flex-1 overflow-auto p-6",
                ItemList {}
            }

            StatusBar {}

            // Dialog (only while a session is pending)
            {provider.modal()}
        }
    }
}

// ============================================================================
// Item List
// ============================================================================

#[component]
fn ItemList() -> Element {
    let state = use_context::<Signal<DemoState>>();
    let items = state.read().items.clone();

    rsx! {
        if items.is_empty() {
            p { class: "text-slate-400", "Nothing left to delete." }
        } else {
            ul {
                class: "item-list max-w-xl flex flex-col gap-2",
                for item in items {
                    ItemRow { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn ItemRow(item: DemoItem) -> Element {
    let open_dialog = use_open_confirmation_dialog::<ConfirmDelete>();
    let state = use_context::<Signal<DemoState>>();

    let id = item.id;
    let prompt = delete_prompt(&item);

    let handle_delete = move |_| match open_dialog.open(prompt.clone()) {
        Ok(handle) => {
            handle
                .on_confirm(move |_| {
                    let mut state = state;
                    state.write().record_deleted(id);
                })
                .on_dismiss(move |reason: Option<&DismissReason>| {
                    let mut state = state;
                    state.write().record_kept(id, reason.copied());
                });
        }
        Err(e) => {
            tracing::error!("Failed to open delete dialog: {}", e);
            let mut state = state;
            state.write().set_status(e.to_string(), StatusLevel::Error);
        }
    };

    rsx! {
        li {
            class: "flex items-center justify-between p-3 bg-slate-800 rounded-lg border border-slate-700",
            div {
                span { class: "font-medium", "{item.name}" }
                if item.protected {
                    span { class: "ml-2 text-xs text-amber-400", "protected" }
                }
            }
            button {
                r#type: "button",
                class: "px-3 py-1 bg-red-600 hover:bg-red-700 rounded-lg transition-colors",
                onclick: handle_delete,
                "Delete"
            }
        }
    }
}

/// Build the dialog props for deleting `item`
pub fn delete_prompt(item: &DemoItem) -> ConfirmDelete {
    let mut prompt = ConfirmDelete::new(
        format!("Delete {}?", item.name),
        "This action cannot be undone.",
    )
    .with_item(item.name.clone());

    for dependent in &item.dependents {
        prompt = prompt.with_cascading(dependent.clone());
    }
    if item.protected {
        prompt = prompt.requiring_typed_confirmation();
    }
    prompt
}

// ============================================================================
// Status Bar
// ============================================================================

#[component]
fn StatusBar() -> Element {
    let state = use_context::<Signal<DemoState>>();
    let status = state.read().status_message.clone();
    let remaining = state.read().items.len();

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center px-4 text-xs text-slate-400 shrink-0",

            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "text-slate-400",
                        StatusLevel::Success => "text-green-400",
                        StatusLevel::Warning => "text-amber-400",
                        StatusLevel::Error => "text-red-400",
                    },
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }

            div { class: "flex-1" }

            span { "{remaining} item(s)" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_plain_item() {
        let prompt = delete_prompt(&DemoItem::new(3, "Comment"));
        assert_eq!(prompt.title, "Delete Comment?");
        assert_eq!(prompt.item_name.as_deref(), Some("Comment"));
        assert!(prompt.cascading.is_empty());
        assert!(prompt.accepts(""));
    }

    #[test]
    fn test_delete_prompt_carries_dependents_and_protection() {
        let item = DemoItem::new(1, "User")
            .with_dependent("2 relationships")
            .protected();
        let prompt = delete_prompt(&item);

        assert_eq!(prompt.cascading, vec!["2 relationships".to_string()]);
        assert!(prompt.require_typed_confirmation);
        assert!(!prompt.accepts(""));
    }
}
