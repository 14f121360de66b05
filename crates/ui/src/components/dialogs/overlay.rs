//! # Dialog Overlay
//!
//! Fixed backdrop with a centered panel. Clicking the backdrop or pressing
//! Escape reports a dismissal; clicks inside the panel do not propagate.

use dioxus::prelude::*;

/// How the user left the overlay without using the dialog's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayExit {
    Backdrop,
    Escape,
}

#[derive(Props, Clone, PartialEq)]
pub struct DialogOverlayProps {
    /// Extra classes for the panel (width, padding)
    #[props(default = "max-w-lg w-full".to_string())]
    pub panel_class: String,

    /// Called when the backdrop is clicked or Escape is pressed
    #[props(default)]
    pub on_exit: EventHandler<OverlayExit>,

    pub children: Element,
}

/// Backdrop and panel wrapper for modal content
#[component]
pub fn DialogOverlay(props: DialogOverlayProps) -> Element {
    let on_exit = props.on_exit;

    rsx! {
        div {
            class: "dialog-overlay fixed inset-0 z-50 flex items-center justify-center",
            tabindex: "-1",
            // Escape only reaches a focused element
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!("Could not focus dialog overlay: {:?}", err);
                }
            },
            onkeydown: move |e| {
                if let Some(exit) = exit_for_key(&e.key()) {
                    on_exit.call(exit);
                }
            },

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| on_exit.call(OverlayExit::Backdrop),
            }

            // Panel
            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 {props.panel_class}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                {props.children}
            }
        }
    }
}

/// Keyboard exit for `key`, if it closes the overlay
fn exit_for_key(key: &Key) -> Option<OverlayExit> {
    match key {
        Key::Escape => Some(OverlayExit::Escape),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    #[test]
    fn test_escape_exits() {
        assert_eq!(exit_for_key(&Key::Escape), Some(OverlayExit::Escape));
        assert_eq!(exit_for_key(&Key::Enter), None);
        assert_eq!(exit_for_key(&Key::Character("q".to_string())), None);
    }

    #[test]
    fn test_overlay_renders_headless() {
        fn app() -> Element {
            rsx! {
                DialogOverlay { p { "body" } }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
