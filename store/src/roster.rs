//! Member roster collaborator trait.

use crate::{CancelToken, StoreError};
use agora_types::{MemberId, MemberProfile};

/// Looks up member profiles (roles, join date, ban flag).
///
/// Backed by the community platform in production; the core only ever reads
/// point-in-time snapshots through it.
pub trait MemberRoster {
    fn profile(
        &self,
        member: MemberId,
        cancel: &CancelToken,
    ) -> Result<Option<MemberProfile>, StoreError>;
}
