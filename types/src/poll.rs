//! The poll aggregate root and its lifecycle/configuration enums.

use crate::id::{PollId, RoleId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// The lifecycle stage of a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Being configured by an admin; invisible to members.
    Draft,
    /// Members may submit entries.
    SubmissionOpen,
    /// Submissions closed; admins review entries before voting.
    Review,
    /// Members may cast ballots.
    VotingOpen,
    /// Voting finished; tallies and winners are public. Terminal.
    Closed,
    /// Abandoned by an admin. Terminal.
    Cancelled,
}

impl Stage {
    /// Whether the poll has closed normally (tallies are public).
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether the poll can never change stage again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }

    /// Whether members may currently submit entries.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, Self::SubmissionOpen)
    }

    /// Whether members may currently cast ballots.
    pub fn accepts_votes(&self) -> bool {
        matches!(self, Self::VotingOpen)
    }
}

/// How ballots are counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VotingMethod {
    /// Every selected entry receives one vote; no ranking.
    Approval,
    /// Instant-runoff: ranked choices, lowest entries eliminated per round.
    Irv,
}

impl VotingMethod {
    /// Whether ballots under this method carry ranks.
    pub fn requires_ranking(&self) -> bool {
        matches!(self, Self::Irv)
    }
}

/// Whether a submission field is collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRequirement {
    /// Field is not collected and never rendered.
    Off,
    /// Field may be supplied.
    Optional,
    /// Field must be supplied.
    Required,
}

impl FieldRequirement {
    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// A community poll.
///
/// Window fields are `None` when no automatic transition is scheduled for
/// that boundary ("no auto-close"). `require_ranking` is derived from
/// `method` and recomputed on every transition and method edit; it is stored
/// so read-side consumers never recompute it against a stale method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
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
    pub title_field: FieldRequirement,
    pub description_field: FieldRequirement,
    pub image_field: FieldRequirement,
    /// Maximum number of choices on one ballot.
    pub max_selections: u32,
    /// Maximum number of entries one member may submit.
    pub max_submissions_per_member: u32,
    /// A member must hold ALL of these roles to participate. Empty = no gate.
    pub required_roles: Vec<RoleId>,
    /// A member must have joined strictly before this cutoff to participate.
    pub joined_before: Option<Timestamp>,
    /// Set once voting opens; freezes the voting method.
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Poll {
    /// Create a new draft poll with default submission settings.
    pub fn new(id: PollId, title: impl Into<String>, created_at: Timestamp) -> Self {
        let method = VotingMethod::Approval;
        Self {
            id,
            title: title.into(),
            description: String::new(),
            stage: Stage::Draft,
            method,
            require_ranking: method.requires_ranking(),
            submission_opens_at: None,
            submission_closes_at: None,
            voting_opens_at: None,
            voting_closes_at: None,
            title_field: FieldRequirement::Required,
            description_field: FieldRequirement::Optional,
            image_field: FieldRequirement::Required,
            max_selections: 3,
            max_submissions_per_member: 1,
            required_roles: Vec::new(),
            joined_before: None,
            locked_at: None,
            created_at,
        }
    }

    /// Re-derive `require_ranking` from the voting method.
    pub fn recompute_ranking(&mut self) {
        self.require_ranking = self.method.requires_ranking();
    }

    /// Whether the voting method can still be edited.
    pub fn method_editable(&self) -> bool {
        self.locked_at.is_none()
            && matches!(
                self.stage,
                Stage::Draft | Stage::SubmissionOpen | Stage::Review
            )
    }
}
