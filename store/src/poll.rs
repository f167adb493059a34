//! Poll storage trait.

use crate::{CancelToken, StoreError, Versioned};
use agora_types::{Poll, PollId};

/// Trait for storing polls with optimistic concurrency.
pub trait PollStore {
    /// Allocate a fresh poll id.
    fn allocate_poll_id(&self, cancel: &CancelToken) -> Result<PollId, StoreError>;

    /// Get a poll and the version it was read at.
    fn get_poll(
        &self,
        id: PollId,
        cancel: &CancelToken,
    ) -> Result<Option<Versioned<Poll>>, StoreError>;

    /// Write a poll.
    ///
    /// `expected = None` inserts (fails `Duplicate` if the id exists);
    /// `expected = Some(v)` replaces the record read at version `v` and fails
    /// `Conflict` if a competing write got there first. Returns the new
    /// version.
    fn put_poll(
        &self,
        poll: &Poll,
        expected: Option<u64>,
        cancel: &CancelToken,
    ) -> Result<u64, StoreError>;

    /// All polls, in no particular order.
    fn list_polls(&self, cancel: &CancelToken) -> Result<Vec<Poll>, StoreError>;

    /// Delete a poll. Implementations cascade to its entries and ballots.
    fn delete_poll(&self, id: PollId, cancel: &CancelToken) -> Result<(), StoreError>;
}
