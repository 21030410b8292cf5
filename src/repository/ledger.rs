//! Loan ledger repository (open Loan records)

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::error::AppResult;
use crate::models::{Book, Loan, Member};
use crate::storage::Storage;

const COLLECTION: &str = "loans";

/// The owned collection of currently open loans. A closed loan is
/// removed outright; the ledger keeps no history.
pub struct LoanLedger {
    store: Arc<dyn Storage>,
    loans: Vec<Loan>,
}

impl LoanLedger {
    /// Load the ledger from the store.
    pub fn load(store: Arc<dyn Storage>) -> AppResult<Self> {
        let loans = store
            .load(COLLECTION)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { store, loans })
    }

    /// Open a loan for the given book and member, due after `period`,
    /// and persist the ledger. The book and member are embedded as
    /// loan-time snapshots.
    pub fn open_loan(
        &mut self,
        book: Book,
        member: Member,
        now: DateTime<Utc>,
        period: Duration,
    ) -> AppResult<Loan> {
        let loan = Loan::open(book, member, now, period);
        self.loans.push(loan.clone());
        self.persist()?;
        Ok(loan)
    }

    /// Remove and return the first open loan whose embedded book has this
    /// ISBN and is marked on loan. `None` means nothing matched and
    /// nothing was written.
    pub fn close_loan_for_isbn(&mut self, isbn: &str) -> AppResult<Option<Loan>> {
        let Some(pos) = self
            .loans
            .iter()
            .position(|l| l.book.isbn == isbn && !l.book.available)
        else {
            return Ok(None);
        };
        let loan = self.loans.remove(pos);
        self.persist()?;
        Ok(Some(loan))
    }

    /// Current in-memory snapshot, insertion order preserved.
    pub fn list(&self) -> &[Loan] {
        &self.loans
    }

    fn persist(&self) -> AppResult<()> {
        let records = self
            .loans
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.save(COLLECTION, &records)
    }
}
