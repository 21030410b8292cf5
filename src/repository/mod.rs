//! Repository layer: the three persisted collections
//!
//! Each repository owns its collection's in-memory state, refreshed once
//! at startup, and flushes the whole collection to the storage provider
//! after every mutation.

pub mod catalog;
pub mod ledger;
pub mod roster;

use std::sync::Arc;

use crate::error::AppResult;
use crate::storage::Storage;

pub use catalog::Catalog;
pub use ledger::LoanLedger;
pub use roster::Roster;

/// Container for the three collections, owned by the caller of the
/// lending engine for the lifetime of the process.
pub struct Repository {
    pub catalog: Catalog,
    pub roster: Roster,
    pub ledger: LoanLedger,
}

impl Repository {
    /// Load all collections from the given store. Absent stores load as
    /// empty collections; present-but-malformed data is a fatal error.
    pub fn load(store: Arc<dyn Storage>) -> AppResult<Self> {
        Ok(Self {
            catalog: Catalog::load(store.clone())?,
            roster: Roster::load(store.clone())?,
            ledger: LoanLedger::load(store)?,
        })
    }
}
