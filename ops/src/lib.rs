//! Operation contracts for agora polls.
//!
//! Everything the surrounding HTTP layer calls lives here: one
//! [`PollService`] method per operation, taking a caller identity and typed
//! request values, returning typed results. The service composes the pure
//! engine crates over a snapshot loaded through the store traits; it holds
//! no state of its own.
//!
//! Stage auto-transitions are evaluated lazily on every poll read here and
//! persisted immediately; there is no background scheduler.

pub mod error;
pub mod service;
pub mod view;

pub use error::{OpError, OpResult};
pub use service::PollService;
pub use view::{
    BallotView, Caller, EntrySubmission, EntryView, MetadataPatch, PollDetail, PollDraft,
    PollSummary, SubmissionSettingsPatch, VotingSettingsPatch,
};
