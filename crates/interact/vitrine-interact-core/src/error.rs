//! Error types for the interaction engine.
//!
//! Only the hard boundaries are fallible: page JSON parsing, snapshot
//! validation, and config validation. In-engine lookup misses stay silent
//! skips surfaced as `Option` at the registry boundary.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InteractError {
    /// Page snapshot JSON failed to parse
    #[error("Page parse error: {reason}")]
    PageParse { reason: String },

    /// Page snapshot parsed but violates a structural requirement
    #[error("Invalid page snapshot: {reason}")]
    InvalidPage { reason: String },

    /// Configuration value out of range or inconsistent
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Target path failed to parse
    #[error("Invalid target path: {reason}")]
    InvalidPath { reason: String },

    /// Generic engine error
    #[error("Interaction error: {message}")]
    Generic { message: String },
}

impl InteractError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Stable category label for host-side reporting.
    pub fn category(&self) -> &'static str {
        match self {
            Self::PageParse { .. } | Self::InvalidPage { .. } => "page",
            Self::InvalidConfig { .. } => "config",
            Self::InvalidPath { .. } => "path",
            Self::Generic { .. } => "generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_category() {
        let e = InteractError::InvalidConfig {
            reason: "reveal_threshold must lie in [0, 1]".into(),
        };
        assert!(e.to_string().contains("reveal_threshold"));
        assert_eq!(e.category(), "config");
        assert_eq!(InteractError::new("boom").category(), "generic");
    }

    #[test]
    fn serde_roundtrip() {
        let e = InteractError::PageParse {
            reason: "expected value".into(),
        };
        let s = serde_json::to_string(&e).unwrap();
        let back: InteractError = serde_json::from_str(&s).unwrap();
        assert_eq!(e, back);
    }
}
