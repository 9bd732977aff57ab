//! Error types for Category Desk
//!
//! This module provides the error type shared by the configuration layer and
//! the local (pre-request) validation of category forms.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Category Desk
#[derive(Debug, Error)]
pub enum CoreError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A form field failed the local presence check
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Configuration file is not valid TOML for [`crate::AppConfig`]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a validation error for a form field
    pub fn validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CoreError::Config(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation { .. })
    }

    /// Check if this error came from loading configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CoreError::Config(_) | CoreError::ConfigRead { .. } | CoreError::ConfigParse(_)
        )
    }

    /// Field name attached to a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// Tests
// ============================================================================
