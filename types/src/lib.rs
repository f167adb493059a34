//! Fundamental types for agora polls.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: ids, timestamps, asset references, the poll/entry/ballot models,
//! and the enums that drive the lifecycle and submission rules.

pub mod asset;
pub mod ballot;
pub mod entry;
pub mod id;
pub mod member;
pub mod poll;
pub mod time;

pub use asset::AssetRef;
pub use ballot::{Ballot, Choice};
pub use entry::{Disqualification, Entry};
pub use id::{BallotId, EntryId, MemberId, PollId, RoleId};
pub use member::MemberProfile;
pub use poll::{FieldRequirement, Poll, Stage, VotingMethod};
pub use time::Timestamp;
