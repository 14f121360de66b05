//! Dialog controller
//!
//! The controller owns everything stateful about one modal: visibility, the
//! pending props, and the confirm/dismiss listener sets. It moves between two
//! states:
//!
//! ```text
//!            open(props)                 confirm(..) / dismiss(..)
//!   Idle ─────────────────────▶ Open ─────────────────────────────▶ Idle
//!                                 │ ▲
//!                                 └─┘ open(props): previous session
//!                                     discarded, listeners dropped unnotified
//! ```
//!
//! Every transition commits the whole state before any callback (listener or
//! observer) runs, so callbacks always see a consistent controller and may
//! call back into it.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use chrono::Utc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::{DialogConfig, PanicPolicy};
use crate::listener::{Listener, ListenerSet};
use crate::observer::{Observers, Subscription};
use crate::traits::ModalProps;
use crate::types::{
    ControllerId, DialogEvent, DialogStatus, ListenerCounts, Resolution, ResolutionKind,
    ResolveReport, SessionId, SessionInfo,
};

// ============================================================================
// Controller State
// ============================================================================

struct ControllerState<P: ModalProps> {
    status: DialogStatus,
    props: Option<P>,
    session: Option<SessionInfo>,
    last_session: SessionId,
    confirm: ListenerSet<P::Confirm>,
    dismiss: ListenerSet<P::Dismiss>,
}

impl<P: ModalProps> ControllerState<P> {
    fn new() -> Self {
        Self {
            status: DialogStatus::Idle,
            props: None,
            session: None,
            last_session: SessionId(0),
            confirm: ListenerSet::new(),
            dismiss: ListenerSet::new(),
        }
    }

    fn is_current(&self, session: SessionId) -> bool {
        self.session.is_some_and(|s| s.id == session)
    }
}

struct ControllerInner<P: ModalProps> {
    id: ControllerId,
    config: DialogConfig,
    state: RefCell<ControllerState<P>>,
    observers: Observers,
}

impl<P: ModalProps> ControllerInner<P> {
    fn label(&self) -> &str {
        self.config.label_or(P::modal_name())
    }
}

// ============================================================================
// DialogController
// ============================================================================

/// Open/register/resolve protocol for one modal
///
/// Cloning is cheap and yields a handle to the same controller.
pub struct DialogController<P: ModalProps> {
    inner: Rc<ControllerInner<P>>,
}

impl<P: ModalProps> DialogController<P> {
    /// Create an idle controller
    pub fn new(config: DialogConfig) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                id: Uuid::new_v4(),
                config,
                state: RefCell::new(ControllerState::new()),
                observers: Observers::default(),
            }),
        }
    }

    /// Unique id of this controller
    pub fn id(&self) -> ControllerId {
        self.inner.id
    }

    /// Label used in log output
    pub fn label(&self) -> &str {
        self.inner.label()
    }

    /// Configuration the controller was created with
    pub fn config(&self) -> &DialogConfig {
        &self.inner.config
    }

    // ------------------------------------------------------------------------
    // Opening
    // ------------------------------------------------------------------------

    /// Show the modal with `props` and start a new session
    ///
    /// Any pending session is discarded: its listeners are dropped without
    /// being notified.
    pub fn open(&self, props: P) -> OpenHandle<P> {
        let (session, superseded, discarded) = {
            let mut state = self.inner.state.borrow_mut();
            let discarded = (state.confirm.take(), state.dismiss.take());
            let superseded = state.session.take();

            let id = state.last_session.next();
            state.last_session = id;
            state.session = Some(SessionInfo {
                id,
                opened_at: Utc::now(),
            });
            state.props = Some(props);
            state.status = DialogStatus::Open;
            (id, superseded, discarded)
        };
        drop(discarded);

        if let Some(previous) = superseded {
            warn!(
                dialog = self.label(),
                session = %previous.id,
                "Pending dialog session discarded by a new open()"
            );
            self.inner
                .observers
                .notify(DialogEvent::Superseded { session: previous.id });
        }

        if self.inner.config.log_sessions {
            debug!(dialog = self.label(), session = %session, "Dialog opened");
        }
        self.inner.observers.notify(DialogEvent::Opened { session });

        OpenHandle {
            controller: Rc::downgrade(&self.inner),
            session,
        }
    }

    /// Show the modal with default props
    pub fn open_default(&self) -> OpenHandle<P>
    where
        P: Default,
    {
        self.open(P::default())
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    /// Confirm the pending session
    pub fn confirm(&self, result: Option<P::Confirm>) -> Option<ResolveReport> {
        self.resolve(Resolution::Confirm(result))
    }

    /// Dismiss the pending session
    pub fn dismiss(&self, result: Option<P::Dismiss>) -> Option<ResolveReport> {
        self.resolve(Resolution::Dismiss(result))
    }

    /// Resolve the pending session and notify the matching listeners
    ///
    /// The dialog is hidden and both listener sets are cleared before any
    /// listener runs. Returns `None` when no session is pending.
    pub fn resolve(&self, resolution: Resolution<P::Confirm, P::Dismiss>) -> Option<ResolveReport> {
        let kind = resolution.kind();

        let (session, confirm, dismiss, props) = {
            let mut state = self.inner.state.borrow_mut();
            let Some(session) = state.session.take() else {
                drop(state);
                debug!(dialog = self.label(), kind = %kind, "Resolve ignored: dialog is idle");
                return None;
            };
            state.status = DialogStatus::Idle;
            let props = state.props.take();
            (session, state.confirm.take(), state.dismiss.take(), props)
        };
        drop(props);

        if self.inner.config.log_sessions {
            let listeners = match kind {
                ResolutionKind::Confirm => confirm.len(),
                ResolutionKind::Dismiss => dismiss.len(),
            };
            debug!(
                dialog = self.label(),
                session = %session.id,
                kind = %kind,
                listeners,
                "Dialog resolved"
            );
        }
        self.inner.observers.notify(DialogEvent::Resolved {
            session: session.id,
            kind,
        });

        let (notified, panicked) = match resolution {
            Resolution::Confirm(result) => {
                self.notify_listeners(&confirm, result.as_ref(), session.id, kind)
            }
            Resolution::Dismiss(result) => {
                self.notify_listeners(&dismiss, result.as_ref(), session.id, kind)
            }
        };

        Some(ResolveReport {
            session: session.id,
            kind,
            notified,
            panicked,
        })
    }

    fn notify_listeners<T: 'static>(
        &self,
        listeners: &[Listener<T>],
        result: Option<&T>,
        session: SessionId,
        kind: ResolutionKind,
    ) -> (usize, usize) {
        let mut panicked = 0;

        for listener in listeners {
            match self.inner.config.listener_panics {
                PanicPolicy::Propagate => listener.call(result),
                PanicPolicy::Isolate => {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener.call(result)));
                    if let Err(payload) = outcome {
                        panicked += 1;
                        error!(
                            dialog = self.label(),
                            session = %session,
                            kind = %kind,
                            "Dialog listener panicked: {}",
                            panic_message(&*payload)
                        );
                    }
                }
            }
        }

        (listeners.len(), panicked)
    }

    /// Release listeners and hide the modal because the owning scope ended
    ///
    /// Pending listeners are dropped without being notified.
    pub fn teardown(&self) {
        let released = {
            let mut state = self.inner.state.borrow_mut();
            state.status = DialogStatus::Idle;
            state.session = None;
            (state.props.take(), state.confirm.take(), state.dismiss.take())
        };
        drop(released);

        debug!(dialog = self.label(), "Dialog scope torn down");
        self.inner.observers.notify(DialogEvent::TornDown);
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Whether the modal is currently shown
    pub fn is_visible(&self) -> bool {
        self.inner.state.borrow().status.is_visible()
    }

    /// Current state machine position
    pub fn status(&self) -> DialogStatus {
        self.inner.state.borrow().status
    }

    /// The pending session, if any
    pub fn session(&self) -> Option<SessionInfo> {
        self.inner.state.borrow().session
    }

    /// Run `f` against the pending props
    ///
    /// `f` must not open or resolve this controller.
    pub fn with_props<R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        self.inner.state.borrow().props.as_ref().map(f)
    }

    /// Clone of the pending props
    pub fn props(&self) -> Option<P>
    where
        P: Clone,
    {
        self.inner.state.borrow().props.clone()
    }

    /// Registered listeners per kind
    pub fn listener_counts(&self) -> ListenerCounts {
        let state = self.inner.state.borrow();
        ListenerCounts {
            confirm: state.confirm.len(),
            dismiss: state.dismiss.len(),
        }
    }

    // ------------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------------

    /// Be notified after every state change
    pub fn subscribe(&self, callback: impl Fn(&DialogEvent) + 'static) -> Subscription {
        self.inner.observers.subscribe(callback)
    }

    /// Number of live subscriptions
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }
}

impl<P: ModalProps> Clone for DialogController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: ModalProps> PartialEq for DialogController<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P: ModalProps> fmt::Debug for DialogController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("DialogController")
            .field("label", &self.label())
            .field("id", &self.inner.id)
            .field("status", &state.status)
            .field("session", &state.session.map(|s| s.id))
            .field("confirm_listeners", &state.confirm.len())
            .field("dismiss_listeners", &state.dismiss.len())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<non-string panic payload>"
    }
}

// ============================================================================
// OpenHandle
// ============================================================================

/// Chainable registration handle returned by `open()`
///
/// The handle is bound to the session that created it. Once that session is
/// resolved or superseded, registrations through the handle are ignored.
pub struct OpenHandle<P: ModalProps> {
    controller: Weak<ControllerInner<P>>,
    session: SessionId,
}

impl<P: ModalProps> OpenHandle<P> {
    /// Register a confirm listener
    pub fn on_confirm(self, callback: impl Fn(Option<&P::Confirm>) + 'static) -> Self {
        self.on_confirm_listener(Listener::new(callback))
    }

    /// Register a dismiss listener
    pub fn on_dismiss(self, callback: impl Fn(Option<&P::Dismiss>) + 'static) -> Self {
        self.on_dismiss_listener(Listener::new(callback))
    }

    /// Register a shared confirm listener; a listener already present is kept once
    pub fn on_confirm_listener(self, listener: Listener<P::Confirm>) -> Self {
        self.register(ResolutionKind::Confirm, |state| state.confirm.insert(listener));
        self
    }

    /// Register a shared dismiss listener; a listener already present is kept once
    pub fn on_dismiss_listener(self, listener: Listener<P::Dismiss>) -> Self {
        self.register(ResolutionKind::Dismiss, |state| state.dismiss.insert(listener));
        self
    }

    fn register(&self, kind: ResolutionKind, insert: impl FnOnce(&mut ControllerState<P>) -> bool) {
        let Some(inner) = self.controller.upgrade() else {
            debug!(session = %self.session, kind = %kind, "Listener dropped: controller is gone");
            return;
        };

        let mut state = inner.state.borrow_mut();
        if !state.is_current(self.session) {
            drop(state);
            debug!(
                dialog = inner.label(),
                session = %self.session,
                kind = %kind,
                "Listener dropped: session is no longer pending"
            );
            return;
        }
        if !insert(&mut *state) {
            drop(state);
            debug!(dialog = inner.label(), kind = %kind, "Listener already registered");
        }
    }

    /// Session this handle registers into
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether registrations through this handle still take effect
    pub fn is_pending(&self) -> bool {
        self.controller
            .upgrade()
            .is_some_and(|inner| inner.state.borrow().is_current(self.session))
    }
}

impl<P: ModalProps> fmt::Debug for OpenHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHandle")
            .field("session", &self.session)
            .field("pending", &self.is_pending())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Prompt {
        title: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Cancelled {
        reason: String,
    }

    impl ModalProps for Prompt {
        type Confirm = String;
        type Dismiss = Cancelled;
    }

    fn prompt(title: &str) -> Prompt {
        Prompt {
            title: title.to_string(),
        }
    }

    fn controller() -> DialogController<Prompt> {
        DialogController::new(DialogConfig::default())
    }

    /// Records every invocation as `name:payload`
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn confirm(&self, name: &'static str) -> impl Fn(Option<&String>) + 'static {
            let calls = self.calls.clone();
            move |r| {
                calls
                    .borrow_mut()
                    .push(format!("{name}:{}", r.map(String::as_str).unwrap_or("none")))
            }
        }

        fn dismiss(&self, name: &'static str) -> impl Fn(Option<&Cancelled>) + 'static {
            let calls = self.calls.clone();
            move |r| {
                calls.borrow_mut().push(format!(
                    "{name}:{}",
                    r.map(|c| c.reason.as_str()).unwrap_or("none")
                ))
            }
        }

        fn sorted(&self) -> Vec<String> {
            let mut calls = self.calls.borrow().clone();
            calls.sort();
            calls
        }
    }

    #[test]
    fn test_visibility_lifecycle() {
        let dialog = controller();
        assert!(!dialog.is_visible());
        assert_eq!(dialog.status(), DialogStatus::Idle);

        let _ = dialog.open(prompt("Delete?"));
        assert!(dialog.is_visible());
        assert_eq!(dialog.status(), DialogStatus::Open);

        dialog.confirm(None);
        assert!(!dialog.is_visible());

        let _ = dialog.open(prompt("Again?"));
        dialog.dismiss(None);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_registrations_are_additive_and_chainable() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog
            .open(prompt("Delete?"))
            .on_confirm(rec.confirm("a"))
            .on_confirm(rec.confirm("b"))
            .on_dismiss(rec.dismiss("c"));

        assert_eq!(
            dialog.listener_counts(),
            ListenerCounts {
                confirm: 2,
                dismiss: 1
            }
        );

        let report = dialog.confirm(Some("yes".to_string())).unwrap();
        assert_eq!(report.notified, 2);
        assert_eq!(rec.sorted(), vec!["a:yes", "b:yes"]);
    }

    #[test]
    fn test_confirm_without_payload() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog.open(prompt("Delete?")).on_confirm(rec.confirm("f"));
        dialog.confirm(None);

        assert_eq!(rec.sorted(), vec!["f:none"]);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_dismiss_notifies_only_dismiss_listeners() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog
            .open(prompt("Delete?"))
            .on_confirm(rec.confirm("f"))
            .on_dismiss(rec.dismiss("g"));

        let report = dialog
            .dismiss(Some(Cancelled {
                reason: "cancel".to_string(),
            }))
            .unwrap();

        assert_eq!(report.kind, ResolutionKind::Dismiss);
        assert_eq!(report.notified, 1);
        assert_eq!(rec.sorted(), vec!["g:cancel"]);
    }

    #[test]
    fn test_resolve_clears_both_sets() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog
            .open(prompt("Delete?"))
            .on_confirm(rec.confirm("f"))
            .on_dismiss(rec.dismiss("g"));

        dialog.dismiss(None);
        assert_eq!(dialog.listener_counts(), ListenerCounts::default());

        assert!(dialog.confirm(Some("late".to_string())).is_none());
        assert!(dialog.dismiss(None).is_none());
        assert_eq!(rec.sorted(), vec!["g:none"]);
    }

    #[test]
    fn test_resolve_while_idle_is_noop() {
        let dialog = controller();
        assert!(dialog.confirm(None).is_none());
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_second_open_discards_first_session() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog.open(prompt("first")).on_confirm(rec.confirm("f1"));
        dialog.open(prompt("second")).on_confirm(rec.confirm("f2"));
        dialog.confirm(None);

        assert_eq!(rec.sorted(), vec!["f2:none"]);

        // The first session's listeners never fire later either
        dialog.open(prompt("third"));
        dialog.confirm(None);
        assert_eq!(rec.sorted(), vec!["f2:none"]);
    }

    #[test]
    fn test_stale_handle_registration_ignored() {
        let dialog = controller();
        let rec = Recorder::default();

        let first = dialog.open(prompt("first"));
        assert!(first.is_pending());

        let _second = dialog.open(prompt("second"));
        assert!(!first.is_pending());

        first.on_confirm(rec.confirm("stale"));
        assert_eq!(dialog.listener_counts().confirm, 0);

        dialog.confirm(None);
        assert!(rec.sorted().is_empty());
    }

    #[test]
    fn test_handle_after_resolution_is_inert() {
        let dialog = controller();
        let rec = Recorder::default();

        let handle = dialog.open(prompt("Delete?"));
        dialog.dismiss(None);

        handle.on_confirm(rec.confirm("late"));
        dialog.open(prompt("next"));
        dialog.confirm(None);

        assert!(rec.sorted().is_empty());
    }

    #[test]
    fn test_same_listener_registered_once() {
        let dialog = controller();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let listener = Listener::new(move |_: Option<&String>| h.set(h.get() + 1));

        dialog
            .open(prompt("Delete?"))
            .on_confirm_listener(listener.clone())
            .on_confirm_listener(listener);

        assert_eq!(dialog.listener_counts().confirm, 1);
        dialog.confirm(None);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_props_replaced_on_open() {
        let dialog = controller();
        assert_eq!(dialog.props(), None);

        let _ = dialog.open(prompt("first"));
        let _ = dialog.open(prompt("second"));
        assert_eq!(dialog.props(), Some(prompt("second")));
        assert_eq!(
            dialog.with_props(|p| p.title.len()),
            Some("second".len())
        );

        dialog.confirm(None);
        assert_eq!(dialog.props(), None);
    }

    #[test]
    fn test_open_default_props() {
        let dialog = controller();
        let _ = dialog.open_default();
        assert_eq!(dialog.props(), Some(Prompt::default()));
    }

    #[test]
    fn test_session_ids_increase() {
        let dialog = controller();
        let a = dialog.open(prompt("a")).session();
        let b = dialog.open(prompt("b")).session();
        assert_eq!(a, SessionId(1));
        assert_eq!(b, SessionId(2));
        assert_eq!(dialog.session().map(|s| s.id), Some(b));
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog
            .open(prompt("Delete?"))
            .on_confirm(|_| panic!("listener failed"))
            .on_confirm(rec.confirm("survivor"));

        let report = dialog.confirm(None).unwrap();
        assert_eq!(report.notified, 2);
        assert_eq!(report.panicked, 1);
        assert!(!report.is_clean());
        assert_eq!(rec.sorted(), vec!["survivor:none"]);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_propagate_policy_unwinds_with_state_reset() {
        let dialog: DialogController<Prompt> =
            DialogController::new(DialogConfig::new().with_panic_policy(PanicPolicy::Propagate));

        dialog
            .open(prompt("Delete?"))
            .on_confirm(|_| panic!("listener failed"));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| dialog.confirm(None)));
        assert!(outcome.is_err());
        assert!(!dialog.is_visible());
        assert_eq!(dialog.listener_counts(), ListenerCounts::default());
    }

    #[test]
    fn test_listener_can_reopen_dialog() {
        let dialog = controller();
        let rec = Recorder::default();

        let reopen = dialog.clone();
        let follow_up = rec.confirm("follow-up");
        dialog
            .open(prompt("first"))
            .on_confirm(move |_| {
                reopen.open(prompt("second"));
            })
            .on_confirm(follow_up);

        let report = dialog.confirm(None).unwrap();
        assert_eq!(report.notified, 2);
        assert_eq!(rec.sorted(), vec!["follow-up:none"]);
        assert!(dialog.is_visible());
        assert_eq!(dialog.props(), Some(prompt("second")));
        assert_eq!(dialog.listener_counts(), ListenerCounts::default());
    }

    #[test]
    fn test_observers_see_lifecycle_events() {
        let dialog = controller();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let _sub = dialog.subscribe(move |e| sink.borrow_mut().push(*e));

        let _ = dialog.open(prompt("first"));
        let _ = dialog.open(prompt("second"));
        dialog.dismiss(None);
        dialog.teardown();

        assert_eq!(
            *events.borrow(),
            vec![
                DialogEvent::Opened {
                    session: SessionId(1)
                },
                DialogEvent::Superseded {
                    session: SessionId(1)
                },
                DialogEvent::Opened {
                    session: SessionId(2)
                },
                DialogEvent::Resolved {
                    session: SessionId(2),
                    kind: ResolutionKind::Dismiss
                },
                DialogEvent::TornDown,
            ]
        );
    }

    #[test]
    fn test_observer_sees_committed_state() {
        let dialog = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let probe = dialog.clone();
        let _sub = dialog.subscribe(move |_| {
            sink.borrow_mut()
                .push((probe.is_visible(), probe.listener_counts().total()))
        });

        dialog.open(prompt("Delete?")).on_confirm(|_| {});
        dialog.confirm(None);

        assert_eq!(*seen.borrow(), vec![(true, 0), (false, 0)]);
    }

    #[test]
    fn test_teardown_releases_listeners() {
        let dialog = controller();
        let rec = Recorder::default();

        dialog.open(prompt("Delete?")).on_confirm(rec.confirm("f"));
        dialog.teardown();

        assert!(!dialog.is_visible());
        assert_eq!(dialog.listener_counts(), ListenerCounts::default());
        assert!(dialog.confirm(None).is_none());
        assert!(rec.sorted().is_empty());
    }

    #[test]
    fn test_handle_outliving_controller() {
        let dialog = controller();
        let handle = dialog.open(prompt("Delete?"));
        drop(dialog);

        assert!(!handle.is_pending());
        let _ = handle.on_confirm(|_| {});
    }

    #[test]
    fn test_label_defaults_to_type_name() {
        assert_eq!(controller().label(), "Prompt");
        let labelled: DialogController<Prompt> =
            DialogController::new(DialogConfig::new().with_label("delete"));
        assert_eq!(labelled.label(), "delete");
    }
}
