//! This module defines [GroupId],
//! which is used to identify a group of rows in a [GroupStorage][super::storage::GroupStorage].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Opaque name of a group of stored rows
///
/// The identifier is never interpreted or validated outside of the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Create a new [GroupId].
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name of the group.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
