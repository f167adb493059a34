//! Abstract storage and collaborator traits for agora polls.
//!
//! Every backend (SQL, in-memory for testing) implements these traits; the
//! rest of the workspace depends only on the traits. Writes that replace an
//! existing record carry the version the caller read, and backends must fail
//! with [`StoreError::Conflict`] when it no longer matches. The ops layer
//! decides which conflicts are races to swallow.
//!
//! Every method takes a [`CancelToken`]; implementations return
//! [`StoreError::Cancelled`] once it is set. None of the traits expose
//! blocking I/O to the core; the calling layer owns scheduling.

pub mod assets;
pub mod ballot;
pub mod cancel;
pub mod entry;
pub mod error;
pub mod poll;
pub mod roster;

pub use assets::AssetCatalog;
pub use ballot::BallotStore;
pub use cancel::CancelToken;
pub use entry::EntryStore;
pub use error::StoreError;
pub use poll::PollStore;
pub use roster::MemberRoster;

/// A stored value together with its optimistic-concurrency version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

impl<T> Versioned<T> {
    pub fn new(value: T, version: u64) -> Self {
        Self { value, version }
    }
}
