//! Loan model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, Member};

/// An open loan. Holds snapshots of the book and member as they were at
/// loan time rather than references by identifier, so a loan line keeps
/// its title and member name even if the catalog entry is later edited.
/// Closed loans are removed outright; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub book: Book,
    pub member: Member,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Loan {
    /// Open a loan starting at `loan_date`, due after `period`.
    pub fn open(book: Book, member: Member, loan_date: DateTime<Utc>, period: Duration) -> Self {
        Self {
            book,
            member,
            loan_date,
            due_date: loan_date + period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn due_date_is_loan_date_plus_period() {
        let book = Book::new("Dune", "Frank Herbert", "111");
        let member = Member::new("Alice", "M1");
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let loan = Loan::open(book, member, start, Duration::days(14));

        assert_eq!(loan.loan_date, start);
        assert_eq!(
            loan.due_date,
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
        );
    }
}
