//! Error types shared across the crate.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `DecodeError` | Malformed structured payload under `DecodePolicy::Strict` | Surfaced to the host |
//! | `FilterError` | Duplicate parameter name in one descriptor list | Rejected by `try_build` |
//! | `NavigationError` | Address bar unavailable or write refused | Propagated, plan kept for retry |
//! | `SessionError` | Either of the above during mount or commit | Propagated |

use std::fmt;

/// Stage of the opaque transform at which a structured payload failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStage {
    /// Reversing the percent-escape.
    PercentEscape,
    /// Reversing the base64 transform.
    Base64,
    /// Text does not parse as the expected record.
    Json,
}

impl DecodeStage {
    /// Stable lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PercentEscape => "percent-escape",
            Self::Base64 => "base64",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query parameter could not be decoded into its domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Parameter name, once known.
    pub param: Option<String>,
    /// Failing stage.
    pub stage: DecodeStage,
    /// Underlying parser message.
    pub detail: String,
}

impl DecodeError {
    #[must_use]
    pub fn new(stage: DecodeStage, detail: impl Into<String>) -> Self {
        Self {
            param: None,
            stage,
            detail: detail.into(),
        }
    }

    /// Attach the parameter name the payload was read from.
    #[must_use]
    pub fn for_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(
                f,
                "invalid link: parameter `{param}` failed at {} stage: {}",
                self.stage, self.detail
            ),
            None => write!(f, "invalid payload at {} stage: {}", self.stage, self.detail),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Descriptor list construction defects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Two descriptors share a parameter name.
    DuplicateParam {
        param: &'static str,
        first: usize,
        duplicate: usize,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateParam {
                param,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate query parameter `{param}` at positions {first} and {duplicate}"
            ),
        }
    }
}

impl std::error::Error for FilterError {}

/// Errors raised by an [`AddressBar`](crate::AddressBar) backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No navigation surface (e.g. no `window` in a worker).
    Unavailable(String),
    /// The surface refused the write (e.g. History API security error).
    Rejected(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "address bar unavailable: {msg}"),
            Self::Rejected(msg) => write!(f, "navigation rejected: {msg}"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Errors from mounting or driving a [`PageSession`](crate::PageSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Decode(DecodeError),
    Navigation(NavigationError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode failed: {e}"),
            Self::Navigation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Navigation(e) => Some(e),
        }
    }
}

impl From<DecodeError> for SessionError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<NavigationError> for SessionError {
    fn from(e: NavigationError) -> Self {
        Self::Navigation(e)
    }
}

/// Result type for session operations.
pub type Result<T, E = SessionError> = std::result::Result<T, E>;
