//! Entry storage trait.

use crate::{CancelToken, StoreError};
use agora_types::{Entry, EntryId, PollId};

/// Trait for storing poll entries.
///
/// Entries are small and only ever mutated by a single admin action at a
/// time, so they are stored without version tokens; last write wins.
pub trait EntryStore {
    /// Allocate a fresh entry id.
    fn allocate_entry_id(&self, cancel: &CancelToken) -> Result<EntryId, StoreError>;

    fn get_entry(&self, id: EntryId, cancel: &CancelToken)
        -> Result<Option<Entry>, StoreError>;

    /// All entries belonging to a poll, in creation order.
    fn entries_for_poll(
        &self,
        poll: PollId,
        cancel: &CancelToken,
    ) -> Result<Vec<Entry>, StoreError>;

    /// Insert or replace an entry.
    fn put_entry(&self, entry: &Entry, cancel: &CancelToken) -> Result<(), StoreError>;

    /// Delete an entry. Choice cascade is the caller's responsibility (see
    /// [`crate::BallotStore::purge_entry_choices`]).
    fn delete_entry(&self, id: EntryId, cancel: &CancelToken) -> Result<(), StoreError>;
}
