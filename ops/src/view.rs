//! Request and response payloads for the operation contracts.

use agora_types::{
    AssetRef, Choice, EntryId, FieldRequirement, MemberId, PollId, RoleId, Stage, Timestamp,
    VotingMethod,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The caller's identity, as established by the surrounding auth layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller {
    pub member: MemberId,
    pub is_admin: bool,
}

impl Caller {
    pub fn member(id: u64) -> Self {
        Self {
            member: MemberId::new(id),
            is_admin: false,
        }
    }

    pub fn admin(id: u64) -> Self {
        Self {
            member: MemberId::new(id),
            is_admin: true,
        }
    }
}

/// A poll as presented to one caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSummary {
    pub id: PollId,
    pub title: String,
    pub description: String,
    pub stage: Stage,
    pub method: VotingMethod,
    pub require_ranking: bool,
    pub submission_opens_at: Option<Timestamp>,
    pub submission_closes_at: Option<Timestamp>,
    pub voting_opens_at: Option<Timestamp>,
    pub voting_closes_at: Option<Timestamp>,
    pub max_selections: u32,
    pub max_submissions_per_member: u32,
    /// Whether this caller could submit an entry right now.
    pub can_submit: bool,
    /// Whether this caller could cast a ballot right now.
    pub can_vote: bool,
}

/// An entry as presented to one caller, with the exposure policy applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub id: EntryId,
    pub poll: PollId,
    /// Empty when the poll does not collect titles.
    pub title: String,
    pub description: String,
    /// Present only when the author is exposed to this caller.
    pub author_name: Option<String>,
    pub original_asset: Option<AssetRef>,
    pub public_asset: Option<AssetRef>,
    /// Always present when the entry has one; the teaser never reveals the
    /// original.
    pub teaser_asset: Option<AssetRef>,
    /// Ballots selecting this entry; zero until tallies are exposed.
    pub approvals: u64,
    /// Ballots ranking this entry at each rank; empty until tallies are
    /// exposed.
    pub rank_counts: BTreeMap<u32, u64>,
    pub is_winner: bool,
    /// 1-based rank position; present only in ranked (tally-exposed) views.
    pub position: Option<u32>,
    pub disqualified: bool,
    /// Present for admins only.
    pub disqualify_reason: Option<String>,
    /// Whether the entry belongs to the caller.
    pub is_own: bool,
}

/// The full poll payload: summary, ordered entries, winner set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollDetail {
    pub poll: PollSummary,
    pub entries: Vec<EntryView>,
    /// Winners per the poll's method; empty until tallies are exposed to
    /// this caller.
    pub winners: Vec<EntryId>,
}

/// A member's ballot as returned to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotView {
    pub poll: PollId,
    pub member: MemberId,
    pub submitted_at: Timestamp,
    pub is_final: bool,
    pub choices: Vec<Choice>,
}

/// Input for `create_poll`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PollDraft {
    pub title: String,
    pub description: String,
}

/// Input for `submit_entry`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntrySubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub original_asset: Option<AssetRef>,
    pub public_asset: Option<AssetRef>,
    pub teaser_asset: Option<AssetRef>,
}

/// Partial update for poll title/description. `None` leaves a field alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial update for submission-side settings. Outer `None` leaves a field
/// alone; inner `None` clears a window ("no auto-close").
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmissionSettingsPatch {
    pub title_field: Option<FieldRequirement>,
    pub description_field: Option<FieldRequirement>,
    pub image_field: Option<FieldRequirement>,
    pub max_submissions_per_member: Option<u32>,
    pub submission_opens_at: Option<Option<Timestamp>>,
    pub submission_closes_at: Option<Option<Timestamp>>,
    pub required_roles: Option<Vec<RoleId>>,
    pub joined_before: Option<Option<Timestamp>>,
}

/// Partial update for voting-side settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VotingSettingsPatch {
    pub method: Option<VotingMethod>,
    pub max_selections: Option<u32>,
    pub voting_opens_at: Option<Option<Timestamp>>,
    pub voting_closes_at: Option<Option<Timestamp>>,
}
