//! The exposure rule matrix.

use agora_types::{FieldRequirement, Stage};
use serde::{Deserialize, Serialize};

/// How the viewer relates to the poll and to one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relation {
    pub is_admin: bool,
    /// Whether the entry under consideration belongs to the viewer.
    pub is_owner: bool,
}

/// Which parts of an entry payload the viewer may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    /// Approval counts, rank histograms, winner flag, position rank. When
    /// false, counts render as zero and winner/position stay empty, never
    /// partially leaked.
    pub tallies: bool,
    /// The submitting member's display name.
    pub author: bool,
    /// The original and public assets. The teaser preview is exempt: it is
    /// always shown, it never reveals the original.
    pub assets: bool,
    /// Entry titles render empty for everyone, owner included.
    pub suppress_title: bool,
    /// Ranked (tally) order instead of the per-viewer shuffle. Follows the
    /// tallies rule so a viewer's ordering never leaks more than their
    /// counts do.
    pub ranked_order: bool,
}

/// Evaluate the rule matrix for one (stage, viewer, entry) combination.
pub fn exposure(stage: Stage, title_field: FieldRequirement, rel: Relation) -> Exposure {
    let closed = stage.is_closed();
    let tallies = rel.is_admin || closed;

    Exposure {
        tallies,
        author: rel.is_admin || closed || rel.is_owner,
        assets: rel.is_admin
            || rel.is_owner
            || matches!(stage, Stage::VotingOpen | Stage::Closed),
        suppress_title: title_field.is_off(),
        ranked_order: tallies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBER: Relation = Relation {
        is_admin: false,
        is_owner: false,
    };
    const OWNER: Relation = Relation {
        is_admin: false,
        is_owner: true,
    };
    const ADMIN: Relation = Relation {
        is_admin: true,
        is_owner: false,
    };

    fn at(stage: Stage, rel: Relation) -> Exposure {
        exposure(stage, FieldRequirement::Required, rel)
    }

    #[test]
    fn tallies_only_for_admin_or_closed() {
        for stage in [
            Stage::Draft,
            Stage::SubmissionOpen,
            Stage::Review,
            Stage::VotingOpen,
            Stage::Cancelled,
        ] {
            assert!(!at(stage, MEMBER).tallies, "{stage:?}");
            assert!(!at(stage, OWNER).tallies, "{stage:?}");
            assert!(at(stage, ADMIN).tallies, "{stage:?}");
        }
        assert!(at(Stage::Closed, MEMBER).tallies);
    }

    #[test]
    fn author_visible_to_admin_owner_or_after_close() {
        assert!(!at(Stage::Review, MEMBER).author);
        assert!(at(Stage::Review, OWNER).author);
        assert!(at(Stage::Review, ADMIN).author);
        assert!(at(Stage::Closed, MEMBER).author);
    }

    #[test]
    fn assets_hidden_from_non_owners_until_voting() {
        for stage in [Stage::SubmissionOpen, Stage::Review] {
            assert!(!at(stage, MEMBER).assets, "{stage:?}");
            assert!(at(stage, OWNER).assets, "{stage:?}");
            assert!(at(stage, ADMIN).assets, "{stage:?}");
        }
        // Ballots reference concrete images, so voters see assets.
        assert!(at(Stage::VotingOpen, MEMBER).assets);
        assert!(at(Stage::Closed, MEMBER).assets);
    }

    #[test]
    fn title_off_suppresses_for_everyone() {
        for rel in [MEMBER, OWNER, ADMIN] {
            let exp = exposure(Stage::Closed, FieldRequirement::Off, rel);
            assert!(exp.suppress_title);
        }
        let exp = exposure(Stage::Closed, FieldRequirement::Optional, MEMBER);
        assert!(!exp.suppress_title);
    }

    #[test]
    fn ranked_order_tracks_tally_exposure() {
        for stage in [
            Stage::Draft,
            Stage::SubmissionOpen,
            Stage::Review,
            Stage::VotingOpen,
            Stage::Closed,
        ] {
            for rel in [MEMBER, OWNER, ADMIN] {
                assert_eq!(at(stage, rel).ranked_order, at(stage, rel).tallies);
            }
        }
    }
}
