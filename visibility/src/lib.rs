//! What a given viewer may see of a poll's entries, and in what order.
//!
//! Exposure is a pure function of (stage, viewer relation); it is evaluated
//! per request and never cached, since admin-ness and ownership vary per
//! caller. Ordering is either the per-viewer deterministic shuffle (blind
//! stages) or the tally ranking (once tallies are exposed to the viewer).

pub mod ordering;
pub mod policy;

pub use ordering::{blind_shuffle, order_seed, ranked_sort};
pub use policy::{exposure, Exposure, Relation};
