//! Demo application state
//!
//! A small list of deletable items and a status line. The demo app keeps it
//! in a context-provided `Signal<DemoState>`.

use crate::components::DismissReason;

// ============================================================================
// Items
// ============================================================================

/// Something the user can delete from the demo list
#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem {
    pub id: u32,
    pub name: String,
    /// Items removed together with this one
    pub dependents: Vec<String>,
    /// Deleting requires typed confirmation
    pub protected: bool,
}

impl DemoItem {
    /// Create an unprotected item with no dependents
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dependents: Vec::new(),
            protected: false,
        }
    }

    /// Add a dependent removed along with this item
    pub fn with_dependent(mut self, name: impl Into<String>) -> Self {
        self.dependents.push(name.into());
        self
    }

    /// Mark the item as requiring typed confirmation
    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Status bar message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Demo State
// ============================================================================

/// Everything the demo app renders besides the dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoState {
    pub items: Vec<DemoItem>,
    pub status_message: Option<StatusMessage>,
}

impl DemoState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// State populated with sample items
    pub fn sample() -> Self {
        Self {
            items: vec![
                DemoItem::new(1, "User")
                    .with_dependent("2 relationships")
                    .with_dependent("1 endpoint group"),
                DemoItem::new(2, "Post").with_dependent("1 relationship"),
                DemoItem::new(3, "Comment"),
                DemoItem::new(4, "AuditLog").protected(),
            ],
            status_message: None,
        }
    }

    /// Find an item by id
    pub fn item(&self, id: u32) -> Option<&DemoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Remove an item, returning it if it existed
    pub fn remove_item(&mut self, id: u32) -> Option<DemoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Record the outcome of a confirmed deletion
    pub fn record_deleted(&mut self, id: u32) {
        match self.remove_item(id) {
            Some(item) => self.set_status(format!("Deleted '{}'", item.name), StatusLevel::Success),
            None => self.set_status("Item was already gone", StatusLevel::Warning),
        }
    }

    /// Record the outcome of a dismissed deletion
    pub fn record_kept(&mut self, id: u32, reason: Option<DismissReason>) {
        let name = self
            .item(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let how = reason.map(|r| r.display_name()).unwrap_or("dismissed");
        self.set_status(format!("Kept '{}' ({})", name, how), StatusLevel::Info);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_state() {
        let state = DemoState::sample();
        assert_eq!(state.items.len(), 4);
        assert!(state.item(4).unwrap().protected);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_remove_item() {
        let mut state = DemoState::sample();
        let removed = state.remove_item(2).unwrap();
        assert_eq!(removed.name, "Post");
        assert!(state.item(2).is_none());
        assert!(state.remove_item(2).is_none());
    }

    #[test]
    fn test_record_deleted() {
        let mut state = DemoState::sample();
        state.record_deleted(3);
        assert_eq!(
            state.status_message,
            Some(StatusMessage {
                text: "Deleted 'Comment'".to_string(),
                level: StatusLevel::Success,
            })
        );

        state.record_deleted(3);
        assert_eq!(
            state.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_record_kept() {
        let mut state = DemoState::sample();
        state.record_kept(1, Some(DismissReason::Escape));
        assert_eq!(state.items.len(), 4);
        assert_eq!(
            state.status_message.map(|m| m.text),
            Some("Kept 'User' (escaped)".to_string())
        );
    }

    #[test]
    fn test_record_kept_without_reason() {
        let mut state = DemoState::new();
        state.record_kept(9, None);
        assert_eq!(
            state.status_message.map(|m| m.text),
            Some("Kept 'Unknown' (dismissed)".to_string())
        );
    }
}
