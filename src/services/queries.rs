//! Read-only display projections over the three collections

use std::fmt;

use chrono::{DateTime, Utc};

use crate::repository::Repository;

/// Catalog line with formatted availability status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: &'static str,
}

impl fmt::Display for BookView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}

/// Roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberView {
    pub name: String,
    pub member_id: String,
}

impl fmt::Display for MemberView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.member_id)
    }
}

/// Open-loan line showing the loan-time snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanView {
    pub title: String,
    pub member_name: String,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl fmt::Display for LoanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loaned to {} (from {}, due {})",
            self.title,
            self.member_name,
            self.loan_date.format("%Y-%m-%d"),
            self.due_date.format("%Y-%m-%d")
        )
    }
}

/// Snapshot of the catalog, insertion order.
pub fn list_books(repo: &Repository) -> Vec<BookView> {
    repo.catalog
        .list()
        .iter()
        .map(|b| BookView {
            title: b.title.clone(),
            author: b.author.clone(),
            isbn: b.isbn.clone(),
            status: if b.available { "available" } else { "on loan" },
        })
        .collect()
}

/// Snapshot of the roster, insertion order.
pub fn list_members(repo: &Repository) -> Vec<MemberView> {
    repo.roster
        .list()
        .iter()
        .map(|m| MemberView {
            name: m.name.clone(),
            member_id: m.member_id.clone(),
        })
        .collect()
}

/// Snapshot of the open loans, insertion order.
pub fn list_loans(repo: &Repository) -> Vec<LoanView> {
    repo.ledger
        .list()
        .iter()
        .map(|l| LoanView {
            title: l.book.title.clone(),
            member_name: l.member.name.clone(),
            loan_date: l.loan_date,
            due_date: l.due_date,
        })
        .collect()
}
