//! Vote submission validation.
//!
//! Every rule a ballot must satisfy before it is accepted, checked in a
//! fixed order with the first failure winning. The validator is pure: it
//! never touches storage, so a rejected submission provably leaves persisted
//! state untouched.

pub mod error;
pub mod validator;

pub use error::VoteError;
pub use validator::validate;
