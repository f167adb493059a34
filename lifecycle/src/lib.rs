//! Poll lifecycle state machine.
//!
//! `Draft → SubmissionOpen → Review → VotingOpen → Closed`, with `Cancelled`
//! absorbing from any pre-Closed stage. Manual transitions are admin actions;
//! automatic transitions fire from the poll's time windows and are
//! re-evaluated lazily on every read. Both are pure value functions here.
//! Persistence is the caller's separate step, which keeps the machine
//! testable without a database.

pub mod engine;
pub mod error;

pub use engine::{apply_auto, apply_manual, set_voting_method, TransitionKind, Transitioned};
pub use error::LifecycleError;
