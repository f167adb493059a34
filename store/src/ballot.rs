//! Ballot storage trait.

use crate::{CancelToken, StoreError};
use agora_types::{Ballot, BallotId, EntryId, MemberId, PollId};

/// Trait for storing ballots.
///
/// Backends must guarantee at most one ballot per (poll, member):
/// `upsert_ballot` replaces the member's prior ballot and its whole choice
/// set in one atomic write, so two concurrent submissions from the same
/// member serialize to "create" then "replace", never two rows.
pub trait BallotStore {
    /// Allocate a fresh ballot id.
    fn allocate_ballot_id(&self, cancel: &CancelToken) -> Result<BallotId, StoreError>;

    /// The member's ballot for a poll, if any.
    fn ballot_for_member(
        &self,
        poll: PollId,
        member: MemberId,
        cancel: &CancelToken,
    ) -> Result<Option<Ballot>, StoreError>;

    /// Every ballot cast on a poll.
    fn ballots_for_poll(
        &self,
        poll: PollId,
        cancel: &CancelToken,
    ) -> Result<Vec<Ballot>, StoreError>;

    /// Atomically create or fully replace the member's ballot.
    fn upsert_ballot(&self, ballot: &Ballot, cancel: &CancelToken) -> Result<(), StoreError>;

    /// Remove every choice referencing `entry` from the poll's ballots
    /// (entry-deletion cascade). Returns how many choices were removed.
    fn purge_entry_choices(
        &self,
        poll: PollId,
        entry: EntryId,
        cancel: &CancelToken,
    ) -> Result<u64, StoreError>;
}
