//! Member profile snapshot supplied by the roster collaborator.

use crate::id::{MemberId, RoleId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// What the core knows about a community member.
///
/// Fetched from the roster (the community platform) by the calling layer;
/// the core treats it as an immutable snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: MemberId,
    pub display_name: String,
    pub roles: Vec<RoleId>,
    pub joined_at: Timestamp,
    pub banned: bool,
}

impl MemberProfile {
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }
}
