//! Lending engine
//!
//! Sole writer of book availability and sole creator/remover of loan
//! records. Every operation re-establishes the availability invariant
//! before returning: a book is unavailable exactly while one open loan
//! in the ledger embeds its ISBN.

use chrono::{DateTime, Duration, Utc};

use crate::error::{AppError, AppResult};
use crate::models::Loan;
use crate::repository::Repository;

/// Orchestrates loan-book / return-book across the catalog and the loan
/// ledger. The collections stay owned by the caller and are passed in
/// per operation.
pub struct LendingService {
    loan_period: Duration,
}

impl LendingService {
    pub fn new(loan_period_days: i64) -> Self {
        Self {
            loan_period: Duration::days(loan_period_days),
        }
    }

    /// Loan a book to a member. Precondition failures (no such book,
    /// book on loan, no such member) are reported outcomes and leave
    /// both memory and storage untouched.
    pub fn loan_book(
        &self,
        repo: &mut Repository,
        isbn: &str,
        member_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Loan> {
        // Verify both preconditions before mutating anything.
        if repo.catalog.find_available_by_isbn(isbn).is_none() {
            return Err(if repo.catalog.contains_isbn(isbn) {
                AppError::Unavailable(format!("book with ISBN {} is on loan", isbn))
            } else {
                AppError::NotFound(format!("no book with ISBN {}", isbn))
            });
        }
        let member = repo
            .roster
            .find_by_id(member_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no member with ID {}", member_id)))?;

        // Flip the first available match, then embed the flipped snapshot
        // in the loan so the ledger agrees with the catalog on the flag.
        let book = repo.catalog.set_availability(isbn, false)?;
        let loan = repo.ledger.open_loan(book, member, now, self.loan_period)?;
        tracing::info!(isbn, member_id, due = %loan.due_date, "book loaned");
        Ok(loan)
    }

    /// Return a loaned book. `NotFound` (no mutation) when no open loan
    /// matches the ISBN.
    pub fn return_book(&self, repo: &mut Repository, isbn: &str) -> AppResult<Loan> {
        let loan = repo
            .ledger
            .close_loan_for_isbn(isbn)?
            .ok_or_else(|| AppError::NotFound(format!("no open loan for ISBN {}", isbn)))?;
        repo.catalog.set_availability(isbn, true)?;
        tracing::info!(isbn, title = %loan.book.title, "book returned");
        Ok(loan)
    }
}
