//! Poll entries and disqualification state.

use crate::asset::AssetRef;
use crate::id::{EntryId, MemberId, PollId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// An admin's decision to exclude an entry from voting and tallying.
///
/// Wrapping the three audit fields in one struct keeps them mutually
/// consistent: they exist together or not at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disqualification {
    pub reason: String,
    pub by: MemberId,
    pub at: Timestamp,
}

/// A member's submission to a poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub poll: PollId,
    pub owner: MemberId,
    /// May be empty when the poll's title field is Off or Optional.
    pub title: String,
    pub description: String,
    /// The submitted image as stored.
    pub original_asset: Option<AssetRef>,
    /// The derived display variant served to voters.
    pub public_asset: Option<AssetRef>,
    /// Low-fidelity blurred preview; safe to show at any stage.
    pub teaser_asset: Option<AssetRef>,
    pub disqualified: Option<Disqualification>,
    pub created_at: Timestamp,
}

impl Entry {
    pub fn is_disqualified(&self) -> bool {
        self.disqualified.is_some()
    }

    pub fn is_owned_by(&self, member: MemberId) -> bool {
        self.owner == member
    }

    /// Mark the entry disqualified. Overwrites any prior decision.
    pub fn disqualify(&mut self, reason: impl Into<String>, by: MemberId, at: Timestamp) {
        self.disqualified = Some(Disqualification {
            reason: reason.into(),
            by,
            at,
        });
    }

    /// Clear a disqualification.
    pub fn requalify(&mut self) {
        self.disqualified = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> Entry {
        Entry {
            id: EntryId::new(1),
            poll: PollId::new(1),
            owner: MemberId::new(7),
            title: "sunset".to_owned(),
            description: String::new(),
            original_asset: None,
            public_asset: None,
            teaser_asset: None,
            disqualified: None,
            created_at: Timestamp::new(100),
        }
    }

    #[test]
    fn disqualify_round_trip() {
        let mut entry = make_entry();
        assert!(!entry.is_disqualified());

        entry.disqualify("off topic", MemberId::new(2), Timestamp::new(200));
        assert!(entry.is_disqualified());
        let dq = entry.disqualified.as_ref().unwrap();
        assert_eq!(dq.reason, "off topic");
        assert_eq!(dq.by, MemberId::new(2));

        entry.requalify();
        assert!(!entry.is_disqualified());
        assert!(entry.disqualified.is_none());
    }
}
