//! Roster repository (Member records)

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::Member;
use crate::storage::Storage;

const COLLECTION: &str = "members";

/// The owned collection of member records.
pub struct Roster {
    store: Arc<dyn Storage>,
    members: Vec<Member>,
}

impl Roster {
    /// Load the roster from the store.
    pub fn load(store: Arc<dyn Storage>) -> AppResult<Self> {
        let members = store
            .load(COLLECTION)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { store, members })
    }

    /// Add a member and persist the roster. Duplicate IDs are accepted
    /// (first-match-wins lookups) but logged.
    pub fn add_member(&mut self, name: &str, member_id: &str) -> AppResult<Member> {
        if self.find_by_id(member_id).is_some() {
            tracing::warn!(member_id, "duplicate member ID added to roster");
        }
        let member = Member::new(name, member_id);
        self.members.push(member.clone());
        self.persist()?;
        tracing::info!(member_id, name, "member added");
        Ok(member)
    }

    /// Current in-memory snapshot, insertion order preserved.
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    /// First member with the given ID, insertion order.
    pub fn find_by_id(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.member_id == member_id)
    }

    fn persist(&self) -> AppResult<()> {
        let records = self
            .members
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

    #[test]
    fn add_member_persists_and_is_findable() {
        let mut store = MockStorage::new();
        store.expect_load().returning(|_| Ok(Vec::new()));
        store.expect_save().times(1).returning(|_, _| Ok(()));
        let mut roster = Roster::load(Arc::new(store)).unwrap();

        roster.add_member("Alice", "M1").unwrap();

        assert_eq!(roster.find_by_id("M1").unwrap().name, "Alice");
        assert!(roster.find_by_id("M2").is_none());
    }
}
