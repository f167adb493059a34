//! Nullable store — thread-safe in-memory storage for testing.
//!
//! Values round-trip through bincode the way a real backend would, so
//! serialization problems surface in tests rather than in production.

use agora_store::{BallotStore, CancelToken, EntryStore, PollStore, StoreError, Versioned};
use agora_types::{Ballot, BallotId, Entry, EntryId, MemberId, Poll, PollId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// An in-memory poll + entry + ballot store for testing.
///
/// Polls carry a version counter and honor the optimistic-concurrency
/// contract; ballots are keyed by (poll, member) so the one-ballot-per-member
/// invariant holds by construction.
pub struct MemStore {
    next_id: AtomicU64,
    polls: Mutex<HashMap<u64, (Vec<u8>, u64)>>,
    entries: Mutex<HashMap<u64, Vec<u8>>>,
    ballots: Mutex<HashMap<(u64, u64), Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            polls: Mutex::new(HashMap::new()),
            entries: Mutex::new(HashMap::new()),
            ballots: Mutex::new(HashMap::new()),
        }
    }

    fn fresh_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStore for MemStore {
    fn allocate_poll_id(&self, cancel: &CancelToken) -> Result<PollId, StoreError> {
        cancel.check()?;
        Ok(PollId::new(self.fresh_id()))
    }

    fn get_poll(
        &self,
        id: PollId,
        cancel: &CancelToken,
    ) -> Result<Option<Versioned<Poll>>, StoreError> {
        cancel.check()?;
        let polls = self.polls.lock().unwrap();
        match polls.get(&id.as_u64()) {
            Some((bytes, version)) => Ok(Some(Versioned::new(decode(bytes)?, *version))),
            None => Ok(None),
        }
    }

    fn put_poll(
        &self,
        poll: &Poll,
        expected: Option<u64>,
        cancel: &CancelToken,
    ) -> Result<u64, StoreError> {
        cancel.check()?;
        let mut polls = self.polls.lock().unwrap();
        let key = poll.id.as_u64();
        match (expected, polls.get(&key)) {
            (None, Some(_)) => Err(StoreError::Duplicate(format!("poll {}", poll.id))),
            (None, None) => {
                polls.insert(key, (encode(poll)?, 1));
                Ok(1)
            }
            (Some(_), None) => Err(StoreError::NotFound(format!("poll {}", poll.id))),
            (Some(version), Some((_, current))) if version != *current => {
                Err(StoreError::Conflict {
                    key: format!("poll {}", poll.id),
                    expected: version,
                    found: *current,
                })
            }
            (Some(version), Some(_)) => {
                polls.insert(key, (encode(poll)?, version + 1));
                Ok(version + 1)
            }
        }
    }

    fn list_polls(&self, cancel: &CancelToken) -> Result<Vec<Poll>, StoreError> {
        cancel.check()?;
        self.polls
            .lock()
            .unwrap()
            .values()
            .map(|(bytes, _)| decode(bytes))
            .collect()
    }

    fn delete_poll(&self, id: PollId, cancel: &CancelToken) -> Result<(), StoreError> {
        cancel.check()?;
        self.polls.lock().unwrap().remove(&id.as_u64());

        // Cascade: the poll owns its entries and ballots.
        let mut entries = self.entries.lock().unwrap();
        let doomed: Vec<u64> = entries
            .iter()
            .filter_map(|(key, bytes)| {
                let entry: Entry = decode(bytes).ok()?;
                (entry.poll == id).then_some(*key)
            })
            .collect();
        for key in doomed {
            entries.remove(&key);
        }

        self.ballots
            .lock()
            .unwrap()
            .retain(|(poll, _), _| *poll != id.as_u64());
        Ok(())
    }
}

impl EntryStore for MemStore {
    fn allocate_entry_id(&self, cancel: &CancelToken) -> Result<EntryId, StoreError> {
        cancel.check()?;
        Ok(EntryId::new(self.fresh_id()))
    }

    fn get_entry(
        &self,
        id: EntryId,
        cancel: &CancelToken,
    ) -> Result<Option<Entry>, StoreError> {
        cancel.check()?;
        match self.entries.lock().unwrap().get(&id.as_u64()) {
            Some(bytes) => Ok(Some(decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn entries_for_poll(
        &self,
        poll: PollId,
        cancel: &CancelToken,
    ) -> Result<Vec<Entry>, StoreError> {
        cancel.check()?;
        let mut entries: Vec<Entry> = self
            .entries
            .lock()
            .unwrap()
            .values()
            .map(|bytes| decode(bytes))
            .collect::<Result<_, _>>()?;
        entries.retain(|e: &Entry| e.poll == poll);
        entries.sort_by_key(|e| (e.created_at, e.id));
        Ok(entries)
    }

    fn put_entry(&self, entry: &Entry, cancel: &CancelToken) -> Result<(), StoreError> {
        cancel.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(entry.id.as_u64(), encode(entry)?);
        Ok(())
    }

    fn delete_entry(&self, id: EntryId, cancel: &CancelToken) -> Result<(), StoreError> {
        cancel.check()?;
        self.entries.lock().unwrap().remove(&id.as_u64());
        Ok(())
    }
}

impl BallotStore for MemStore {
    fn allocate_ballot_id(&self, cancel: &CancelToken) -> Result<BallotId, StoreError> {
        cancel.check()?;
        Ok(BallotId::new(self.fresh_id()))
    }

    fn ballot_for_member(
        &self,
        poll: PollId,
        member: MemberId,
        cancel: &CancelToken,
    ) -> Result<Option<Ballot>, StoreError> {
        cancel.check()?;
        match self
            .ballots
            .lock()
            .unwrap()
            .get(&(poll.as_u64(), member.as_u64()))
        {
            Some(bytes) => Ok(Some(decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn ballots_for_poll(
        &self,
        poll: PollId,
        cancel: &CancelToken,
    ) -> Result<Vec<Ballot>, StoreError> {
        cancel.check()?;
        let ballots = self.ballots.lock().unwrap();
        let mut result = Vec::new();
        for ((poll_key, _), bytes) in ballots.iter() {
            if *poll_key == poll.as_u64() {
                result.push(decode(bytes)?);
            }
        }
        Ok(result)
    }

    fn upsert_ballot(&self, ballot: &Ballot, cancel: &CancelToken) -> Result<(), StoreError> {
        cancel.check()?;
        self.ballots.lock().unwrap().insert(
            (ballot.poll.as_u64(), ballot.member.as_u64()),
            encode(ballot)?,
        );
        Ok(())
    }

    fn purge_entry_choices(
        &self,
        poll: PollId,
        entry: EntryId,
        cancel: &CancelToken,
    ) -> Result<u64, StoreError> {
        cancel.check()?;
        let mut ballots = self.ballots.lock().unwrap();
        let mut removed = 0;
        for ((poll_key, _), bytes) in ballots.iter_mut() {
            if *poll_key != poll.as_u64() {
                continue;
            }
            let mut ballot: Ballot = decode(bytes)?;
            let before = ballot.choices.len();
            ballot.choices.retain(|c| c.entry != entry);
            if ballot.choices.len() != before {
                removed += (before - ballot.choices.len()) as u64;
                *bytes = encode(&ballot)?;
            }
        }
        Ok(removed)
    }
}
