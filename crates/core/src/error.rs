//! Error types for dialog contexts
//!
//! Only two things can go wrong in this crate: opening a dialog with no
//! provider scope bound, and loading configuration. Listener panics are not
//! errors; they are handled according to [`PanicPolicy`](crate::PanicPolicy).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dialog contexts
#[derive(Debug, Error)]
pub enum DialogError {
    // ========================================================================
    // Composition Errors
    // ========================================================================
    /// `open()` was called with no provider scope established
    #[error("Cannot open '{modal}' dialog: used outside of dialog provider scope")]
    OutsideProvider { modal: &'static str },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML parse failure
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl DialogError {
    /// Create the unbound-scope error for modal type `P`
    pub fn outside_provider<P: ?Sized>() -> Self {
        DialogError::OutsideProvider {
            modal: short_type_name::<P>(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        DialogError::Config(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        DialogError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a composition (programming) error
    pub fn is_outside_provider(&self) -> bool {
        matches!(self, DialogError::OutsideProvider { .. })
    }

    /// Check if this error came from configuration loading
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DialogError::Config(_) | DialogError::ConfigParse(_) | DialogError::ConfigNotFound(_)
        )
    }
}

/// Result type alias using DialogError
pub type DialogResult<T> = Result<T, DialogError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> DialogResult<T>;
}

impl<T, E: Into<DialogError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> DialogResult<T> {
        self.map_err(|e| {
            let err: DialogError = e.into();
            DialogError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

/// Last path segment of a type name, generics stripped
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// Tests
// ============================================================================
