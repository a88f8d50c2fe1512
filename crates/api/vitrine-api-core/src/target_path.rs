//! TargetPath parsing and formatting.
//!
//! Grammar (simple, host-agnostic):
//!   namespace/.../target
//! - '/' separates namespace segments
//! - The last segment is the target name
//!   Examples:
//!   "page/hero/StatCounter0" -> namespaces=["page","hero"], target="StatCounter0"
//!   "page/Header"            -> namespaces=["page"], target="Header"
//!
//! Paths are opaque keys minted by the host templating layer; the engine never
//! interprets them beyond equality and formatting. The host promises a path
//! stays stable for the life of a page snapshot.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    /// Namespace segments preceding the target (may be empty)
    pub namespaces: Vec<String>,
    /// Target name (last segment)
    pub target: String,
}

impl TargetPath {
    /// Construct a TargetPath from components.
    pub fn new(namespaces: Vec<String>, target: impl Into<String>) -> Self {
        Self {
            namespaces,
            target: target.into(),
        }
    }

    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("empty path".to_string());
        }
        let mut parts: Vec<&str> = s.split('/').collect();
        if parts.iter().any(|seg| seg.is_empty()) {
            return Err("invalid target path: empty segment".to_string());
        }
        if parts
            .iter()
            .any(|seg| seg.chars().any(char::is_whitespace))
        {
            return Err("invalid target path: segment contains whitespace".to_string());
        }
        let target = parts.pop().unwrap().to_string();
        let namespaces = parts.into_iter().map(|s| s.to_string()).collect();
        Ok(TargetPath { namespaces, target })
    }

    /// Return a namespace segment by index, or `None` if out of bounds.
    pub fn namespace_segment(&self, index: usize) -> Option<&str> {
        self.namespaces.get(index).map(|s| s.as_str())
    }

    /// Iterate over all namespace segments.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(|s| s.as_str())
    }

    /// Return the target component of the path.
    pub fn target_name(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ns in &self.namespaces {
            f.write_str(ns)?;
            f.write_str("/")?;
        }
        f.write_str(&self.target)
    }
}

impl FromStr for TargetPath {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetPath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for TargetPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TargetPath {
    fn deserialize<D>(deserializer: D) -> Result<TargetPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TargetPath::parse(&s).map_err(de::Error::custom)
    }
}
