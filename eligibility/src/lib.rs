//! Eligibility evaluation for poll participation.
//!
//! A poll constrains who may submit entries and cast ballots: members can be
//! banned outright, gated behind a set of required roles, or excluded by a
//! join-date cutoff. The same rules govern submitting and voting.

use agora_types::{MemberProfile, Poll, RoleId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poll's participation constraints, extracted from the poll record.
#[derive(Clone, Copy, Debug)]
pub struct Gate<'a> {
    /// A member must hold ALL of these roles. Empty = no role gate.
    pub required_roles: &'a [RoleId],
    /// A member must have joined strictly before this cutoff.
    pub joined_before: Option<Timestamp>,
}

impl<'a> Gate<'a> {
    pub fn of(poll: &'a Poll) -> Self {
        Self {
            required_roles: &poll.required_roles,
            joined_before: poll.joined_before,
        }
    }
}

/// The outcome of an eligibility check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Eligible,
    /// The member is banned from participating.
    Banned,
    /// The member is missing one of the poll's required roles.
    MissingRole(RoleId),
    /// The member joined at or after the poll's cutoff.
    JoinedTooLate(Timestamp),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eligible => write!(f, "eligible"),
            Self::Banned => write!(f, "member is banned from polls"),
            Self::MissingRole(role) => write!(f, "missing required role {role}"),
            Self::JoinedTooLate(cutoff) => {
                write!(f, "must have joined before {cutoff}")
            }
        }
    }
}

/// Evaluate a member against a poll's gate.
///
/// Checks run ban first, then roles in the poll's declared order, then the
/// join cutoff, and report the first failure.
pub fn check(gate: Gate<'_>, profile: &MemberProfile) -> Eligibility {
    if profile.banned {
        return Eligibility::Banned;
    }
    for role in gate.required_roles {
        if !profile.has_role(*role) {
            return Eligibility::MissingRole(*role);
        }
    }
    if let Some(cutoff) = gate.joined_before {
        if profile.joined_at >= cutoff {
            return Eligibility::JoinedTooLate(cutoff);
        }
    }
    Eligibility::Eligible
}
