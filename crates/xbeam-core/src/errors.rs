//! Structured error types shared across the beam crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`BeamError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (field names, indices, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for beam models.
///
/// Every variant is a programming error on the caller's side; none of them is
/// transient and nothing in this workspace retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BeamError {
    /// A setter or constructor received a value outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// The requested quantity is undefined for the current field values.
    #[error("invalid state: {0}")]
    InvalidState(ErrorInfo),
    /// The beam variant has no concept of the requested quantity.
    #[error("unsupported operation: {0}")]
    Unsupported(ErrorInfo),
    /// A scan-point index was not below the stored count.
    #[error("out of range: {0}")]
    OutOfRange(ErrorInfo),
    /// A probe name did not match any known radiation type.
    #[error("unknown probe: {0}")]
    UnknownProbe(ErrorInfo),
    /// Tolerance configuration could not be parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl BeamError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BeamError::InvalidArgument(info)
            | BeamError::InvalidState(info)
            | BeamError::Unsupported(info)
            | BeamError::OutOfRange(info)
            | BeamError::UnknownProbe(info)
            | BeamError::Config(info)
            | BeamError::Serde(info) => info,
        }
    }

    /// Adds a context entry to the payload while keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            BeamError::InvalidArgument(info) => {
                BeamError::InvalidArgument(info.with_context(key, value))
            }
            BeamError::InvalidState(info) => BeamError::InvalidState(info.with_context(key, value)),
            BeamError::Unsupported(info) => BeamError::Unsupported(info.with_context(key, value)),
            BeamError::OutOfRange(info) => BeamError::OutOfRange(info.with_context(key, value)),
            BeamError::UnknownProbe(info) => BeamError::UnknownProbe(info.with_context(key, value)),
            BeamError::Config(info) => BeamError::Config(info.with_context(key, value)),
            BeamError::Serde(info) => BeamError::Serde(info.with_context(key, value)),
        }
    }

    /// Creates a [`BeamError::InvalidArgument`] error.
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        BeamError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Creates a [`BeamError::Unsupported`] error.
    pub fn unsupported(code: impl Into<String>, message: impl Into<String>) -> Self {
        BeamError::Unsupported(ErrorInfo::new(code, message))
    }
}
