//! Member model

use serde::{Deserialize, Serialize};

/// A library member. Immutable once added; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Natural identifier. Uniqueness is not enforced; lookups take the
    /// first match in insertion order.
    pub member_id: String,
}

impl Member {
    pub fn new(name: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_id: member_id.into(),
        }
    }
}
