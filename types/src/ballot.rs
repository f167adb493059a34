//! Ballots and the choices they carry.

use crate::id::{BallotId, EntryId, MemberId, PollId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One entry selection within a ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub entry: EntryId,
    /// `None` for Approval ballots; `1..=N`, unique and contiguous, for IRV.
    pub rank: Option<u32>,
}

/// A member's single vote on a poll.
///
/// There is at most one ballot per (poll, member); resubmission replaces the
/// whole choice set and refreshes `submitted_at`. Ballots are final the
/// moment they are written; there is no draft state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub id: BallotId,
    pub poll: PollId,
    pub member: MemberId,
    pub submitted_at: Timestamp,
    pub is_final: bool,
    pub choices: Vec<Choice>,
}

impl Ballot {
    /// Whether this ballot selects the given entry.
    pub fn selects(&self, entry: EntryId) -> bool {
        self.choices.iter().any(|c| c.entry == entry)
    }

    /// Choices ordered by rank ascending (unranked choices keep their
    /// submitted order at the end; on a valid IRV ballot there are none).
    pub fn ordered_choices(&self) -> Vec<Choice> {
        let mut ordered = self.choices.clone();
        ordered.sort_by_key(|c| c.rank.unwrap_or(u32::MAX));
        ordered
    }
}
