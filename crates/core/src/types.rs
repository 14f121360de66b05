//! Core types shared by the controller, scopes and UI bindings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for controller unique identifiers
pub type ControllerId = uuid::Uuid;

/// Identifies one open/resolve cycle of a controller
///
/// Session ids increase monotonically per controller, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The session that follows this one
    pub fn next(self) -> Self {
        SessionId(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Dialog Status
// ============================================================================

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogStatus {
    /// No modal shown
    #[default]
    Idle,
    /// Modal shown with a single pending result
    Open,
}

impl DialogStatus {
    /// Whether the modal is visible in this state
    pub fn is_visible(&self) -> bool {
        matches!(self, DialogStatus::Open)
    }
}

/// Bookkeeping for the pending session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub opened_at: DateTime<Utc>,
}

// ============================================================================
// Resolution
// ============================================================================

/// Which terminal handler resolved a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    Confirm,
    Dismiss,
}

impl ResolutionKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ResolutionKind::Confirm => "confirm",
            ResolutionKind::Dismiss => "dismiss",
        }
    }
}

impl std::fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A resolution together with its optional payload
///
/// `C` and `D` are the modal's confirm and dismiss result types.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<C, D> {
    Confirm(Option<C>),
    Dismiss(Option<D>),
}

impl<C, D> Resolution<C, D> {
    /// The kind of this resolution
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Resolution::Confirm(_) => ResolutionKind::Confirm,
            Resolution::Dismiss(_) => ResolutionKind::Dismiss,
        }
    }
}

/// Summary of one resolve pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveReport {
    pub session: SessionId,
    pub kind: ResolutionKind,
    /// Listeners of the matching kind that were invoked
    pub notified: usize,
    /// Listeners that panicked while being notified (isolate policy only)
    pub panicked: usize,
}

impl ResolveReport {
    /// Whether every listener returned normally
    pub fn is_clean(&self) -> bool {
        self.panicked == 0
    }
}

/// Number of listeners currently registered, per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListenerCounts {
    pub confirm: usize,
    pub dismiss: usize,
}

impl ListenerCounts {
    /// Total listeners of both kinds
    pub fn total(&self) -> usize {
        self.confirm + self.dismiss
    }
}

// ============================================================================
// Events
// ============================================================================

/// State change notifications delivered to controller observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogEvent {
    /// A session started and the modal became visible
    Opened { session: SessionId },
    /// A pending session was discarded by a newer `open()`
    Superseded { session: SessionId },
    /// A session was resolved and the modal hidden
    Resolved {
        session: SessionId,
        kind: ResolutionKind,
    },
    /// The owning scope ended
    TornDown,
}

impl DialogEvent {
    /// Whether this event changed visibility
    pub fn changes_visibility(&self) -> bool {
        !matches!(self, DialogEvent::Superseded { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_next() {
        assert_eq!(SessionId(1).next(), SessionId(2));
        assert_eq!(SessionId(7).to_string(), "#7");
    }

    #[test]
    fn test_status_visibility() {
        assert!(!DialogStatus::default().is_visible());
        assert!(DialogStatus::Open.is_visible());
    }

    #[test]
    fn test_resolution_kind() {
        let r: Resolution<(), String> = Resolution::Dismiss(Some("cancel".into()));
        assert_eq!(r.kind(), ResolutionKind::Dismiss);
        assert_eq!(ResolutionKind::Confirm.to_string(), "confirm");
    }

    #[test]
    fn test_listener_counts_total() {
        let counts = ListenerCounts {
            confirm: 2,
            dismiss: 1,
        };
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_event_visibility() {
        assert!(DialogEvent::Opened { session: SessionId(1) }.changes_visibility());
        assert!(!DialogEvent::Superseded { session: SessionId(1) }.changes_visibility());
    }
}
