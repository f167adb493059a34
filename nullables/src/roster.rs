//! Nullable member roster.

use agora_store::{CancelToken, MemberRoster, StoreError};
use agora_types::{MemberId, MemberProfile, RoleId, Timestamp};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory roster holding pre-configured member profiles.
#[derive(Default)]
pub struct NullRoster {
    members: Mutex<HashMap<u64, MemberProfile>>,
}

impl NullRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a member profile.
    pub fn insert(&self, profile: MemberProfile) {
        self.members
            .lock()
            .unwrap()
            .insert(profile.id.as_u64(), profile);
    }

    /// Register a plain, unbanned, role-less member.
    pub fn insert_member(&self, id: MemberId, display_name: &str, joined_at: Timestamp) {
        self.insert(MemberProfile {
            id,
            display_name: display_name.to_owned(),
            roles: Vec::new(),
            joined_at,
            banned: false,
        });
    }

    /// Grant a role to an already-registered member.
    pub fn grant_role(&self, id: MemberId, role: RoleId) {
        if let Some(profile) = self.members.lock().unwrap().get_mut(&id.as_u64()) {
            if !profile.roles.contains(&role) {
                profile.roles.push(role);
            }
        }
    }

    /// Flip a member's ban flag.
    pub fn set_banned(&self, id: MemberId, banned: bool) {
        if let Some(profile) = self.members.lock().unwrap().get_mut(&id.as_u64()) {
            profile.banned = banned;
        }
    }
}

impl MemberRoster for NullRoster {
    fn profile(
        &self,
        member: MemberId,
        cancel: &CancelToken,
    ) -> Result<Option<MemberProfile>, StoreError> {
        cancel.check()?;
        Ok(self.members.lock().unwrap().get(&member.as_u64()).cloned())
    }
}
