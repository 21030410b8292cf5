//! Catalog repository (Book records)

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::Book;
use crate::storage::Storage;

const COLLECTION: &str = "books";

/// The owned collection of book records. Sole holder of every book's
/// canonical availability state; the flag itself is only ever flipped
/// through [`Catalog::set_availability`], which the lending engine alone
/// calls.
pub struct Catalog {
    store: Arc<dyn Storage>,
    books: Vec<Book>,
}

impl Catalog {
    /// Load the catalog from the store.
    pub fn load(store: Arc<dyn Storage>) -> AppResult<Self> {
        let books = store
            .load(COLLECTION)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { store, books })
    }

    /// Add a book to the catalog and persist it. Duplicate ISBNs are
    /// accepted (first-match-wins lookups) but logged.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> AppResult<Book> {
        if self.contains_isbn(isbn) {
            tracing::warn!(isbn, "duplicate ISBN added to catalog");
        }
        let book = Book::new(title, author, isbn);
        self.books.push(book.clone());
        self.persist()?;
        tracing::info!(isbn, title, "book added");
        Ok(book)
    }

    /// Current in-memory snapshot, insertion order preserved.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// First available book with the given ISBN, insertion order.
    pub fn find_available_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn && b.available)
    }

    /// Whether any book (available or not) carries this ISBN.
    pub fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn == isbn)
    }

    /// Flip the first book with this ISBN whose flag differs from
    /// `available`, persist the catalog, and return the updated record.
    pub fn set_availability(&mut self, isbn: &str, available: bool) -> AppResult<Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.isbn == isbn && b.available != available)
            .ok_or_else(|| AppError::NotFound(format!("book with ISBN {} to update", isbn)))?;
        book.available = available;
        let snapshot = book.clone();
        self.persist()?;
        Ok(snapshot)
    }

    fn persist(&self) -> AppResult<()> {
        let records = self
            .books
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.save(COLLECTION, &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorage;

    fn empty_catalog(saves: usize) -> Catalog {
        let mut store = MockStorage::new();
        store.expect_load().returning(|_| Ok(Vec::new()));
        store.expect_save().times(saves).returning(|_, _| Ok(()));
        Catalog::load(Arc::new(store)).unwrap()
    }

    #[test]
    fn add_book_persists_and_starts_available() {
        let mut catalog = empty_catalog(1);

        let book = catalog.add_book("Dune", "Frank Herbert", "111").unwrap();

        assert!(book.available);
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn find_available_skips_books_on_loan() {
        let mut catalog = empty_catalog(3);
        catalog.add_book("Dune", "Frank Herbert", "222").unwrap();
        catalog.add_book("Dune (2nd copy)", "Frank Herbert", "222").unwrap();

        catalog.set_availability("222", false).unwrap();

        // First copy is out; the second copy is the first available match.
        let found = catalog.find_available_by_isbn("222").unwrap();
        assert_eq!(found.title, "Dune (2nd copy)");
    }

    #[test]
    fn set_availability_without_match_is_not_found_and_writes_nothing() {
        let mut catalog = empty_catalog(0);

        let err = catalog.set_availability("999", false).unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
