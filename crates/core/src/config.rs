//! Dialog configuration
//!
//! Configuration is optional; every field has a default. It can be built in
//! code or parsed from TOML:
//!
//! ```toml
//! label = "delete-confirmation"
//! listener_panics = "propagate"
//! log_sessions = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DialogError, DialogResult, ResultExt};

/// What happens when a listener panics during a resolve pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanicPolicy {
    /// Catch and log each panic, keep notifying the remaining listeners
    #[default]
    Isolate,
    /// Let the panic unwind to whoever called `resolve()`
    Propagate,
}

/// Settings shared by every controller a context creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Name used in log output; defaults to the modal type name
    pub label: Option<String>,
    /// Listener panic handling
    pub listener_panics: PanicPolicy,
    /// Emit `debug!` events for open/resolve
    pub log_sessions: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            label: None,
            listener_panics: PanicPolicy::Isolate,
            log_sessions: true,
        }
    }
}

impl DialogConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the listener panic policy
    pub fn with_panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.listener_panics = policy;
        self
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(input: &str) -> DialogResult<Self> {
        let config: DialogConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> DialogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DialogError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .with_context(format!("Reading {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Reject values that parse but make no sense
    pub fn validate(&self) -> DialogResult<()> {
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err(DialogError::config("label must not be blank"));
            }
        }
        Ok(())
    }

    /// The label to log with, falling back to `default`
    pub fn label_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(default)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DialogConfig::default();
        assert_eq!(config.listener_panics, PanicPolicy::Isolate);
        assert!(config.log_sessions);
        assert_eq!(config.label_or("Modal"), "Modal");
    }

    #[test]
    fn test_from_toml_full() {
        let config = DialogConfig::from_toml_str(
            r#"
            label = "delete"
            listener_panics = "propagate"
            log_sessions = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            DialogConfig {
                label: Some("delete".to_string()),
                listener_panics: PanicPolicy::Propagate,
                log_sessions: false,
            }
        );
        assert_eq!(config.label_or("Modal"), "delete");
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let config = DialogConfig::from_toml_str("").unwrap();
        assert_eq!(config, DialogConfig::default());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = DialogConfig::from_toml_str(r#"listener_panics = "ignore""#).unwrap_err();
        assert!(matches!(err, DialogError::ConfigParse(_)));
    }

    #[test]
    fn test_blank_label_rejected() {
        let err = DialogConfig::from_toml_str(r#"label = "  ""#).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label = \"from-file\"").unwrap();

        let config = DialogConfig::load(file.path()).unwrap();
        assert_eq!(config.label.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DialogConfig::load(dir.path().join("dialog.toml")).unwrap_err();
        assert!(matches!(err, DialogError::ConfigNotFound(_)));
    }
}
