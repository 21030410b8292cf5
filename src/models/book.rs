//! Book model

use serde::{Deserialize, Serialize};

/// A catalog entry. The `available` flag is owned by the lending engine:
/// it is false exactly while one open loan references this book's ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Natural identifier. Uniqueness is not enforced; lookups take the
    /// first match in insertion order.
    pub isbn: String,
    pub available: bool,
}

impl Book {
    /// Create a new book, available for loan.
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }
}
