//! Numeric id newtypes.
//!
//! Ids are opaque `u64`s assigned by the persistence layer (member and role
//! ids come straight from the community platform's snowflakes). The newtypes
//! exist so a ballot id can never be passed where an entry id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }

            /// Big-endian byte form, used for deterministic seed derivation.
            pub fn to_be_bytes(&self) -> [u8; 8] {
                self.0.to_be_bytes()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// A poll id.
    PollId
);
id_type!(
    /// An entry id.
    EntryId
);
id_type!(
    /// A ballot id.
    BallotId
);
id_type!(
    /// A community member id.
    MemberId
);
id_type!(
    /// A community role id.
    RoleId
);
