//! Tally computation for agora polls.
//!
//! Both methods take the poll's entries and every ballot cast, and return
//! per-entry counts plus the winner set. Ties are returned as multiple
//! winners, never broken here. Disqualified entries are excluded from
//! counting; a poll with no ballots closes with no winners.
//!
//! All functions are total and pure: there is no error path, and the same
//! snapshot always produces the same result.

pub mod approval;
pub mod histogram;
pub mod irv;

pub use approval::{tally_approval, ApprovalTally};
pub use histogram::rank_histograms;
pub use irv::{tally_irv, IrvRound, IrvTally};
