//! Stage transition engine.

use crate::error::LifecycleError;
use agora_types::{Poll, Stage, Timestamp, VotingMethod};
use serde::{Deserialize, Serialize};

/// An admin-triggered stage transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Draft → SubmissionOpen.
    OpenSubmissions,
    /// SubmissionOpen → Review.
    StartReview,
    /// Review → VotingOpen.
    OpenVoting,
    /// VotingOpen → Closed.
    Close,
    /// Any pre-Closed stage → Cancelled.
    Cancel,
}

impl TransitionKind {
    /// The stage this transition moves the poll into.
    pub fn target(&self) -> Stage {
        match self {
            Self::OpenSubmissions => Stage::SubmissionOpen,
            Self::StartReview => Stage::Review,
            Self::OpenVoting => Stage::VotingOpen,
            Self::Close => Stage::Closed,
            Self::Cancel => Stage::Cancelled,
        }
    }

    /// The exact stage the poll must be in, for the forward transitions.
    fn predecessor(&self) -> Option<Stage> {
        match self {
            Self::OpenSubmissions => Some(Stage::Draft),
            Self::StartReview => Some(Stage::SubmissionOpen),
            Self::OpenVoting => Some(Stage::Review),
            Self::Close => Some(Stage::VotingOpen),
            Self::Cancel => None,
        }
    }
}

/// The result of a transition attempt: the (possibly unchanged) poll value
/// and whether anything actually moved.
#[derive(Clone, Debug)]
pub struct Transitioned {
    pub poll: Poll,
    pub changed: bool,
}

impl Transitioned {
    fn unchanged(poll: Poll) -> Self {
        Self {
            poll,
            changed: false,
        }
    }

    fn changed(mut poll: Poll) -> Self {
        poll.recompute_ranking();
        Self {
            poll,
            changed: true,
        }
    }
}

/// Apply an admin-triggered transition.
///
/// A transition whose target is the poll's current stage returns unchanged;
/// any other attempt from the wrong stage fails with [`LifecycleError::WrongStage`]
/// naming the required stage. Cancellation is allowed from every pre-Closed
/// stage and is idempotent on an already-cancelled poll.
pub fn apply_manual(
    poll: &Poll,
    kind: TransitionKind,
    now: Timestamp,
) -> Result<Transitioned, LifecycleError> {
    if poll.stage == kind.target() {
        return Ok(Transitioned::unchanged(poll.clone()));
    }

    if let Some(required) = kind.predecessor() {
        if poll.stage != required {
            return Err(LifecycleError::WrongStage {
                required,
                actual: poll.stage,
            });
        }
    } else if poll.stage == Stage::Closed {
        return Err(LifecycleError::CancelAfterClose);
    }

    let mut next = poll.clone();
    match kind {
        TransitionKind::OpenSubmissions => {
            next.stage = Stage::SubmissionOpen;
            // Pull a future (or unset) open time back to the actual moment.
            if next
                .submission_opens_at
                .map_or(true, |t| t.is_future(now))
            {
                next.submission_opens_at = Some(now);
            }
        }
        TransitionKind::StartReview => {
            next.stage = Stage::Review;
            next.submission_closes_at = Some(now);
        }
        TransitionKind::OpenVoting => {
            next.stage = Stage::VotingOpen;
            if next.voting_opens_at.map_or(true, |t| t.is_future(now)) {
                next.voting_opens_at = Some(now);
            }
            if next.submission_closes_at.is_none() {
                next.submission_closes_at = Some(now);
            }
            next.locked_at.get_or_insert(now);
        }
        TransitionKind::Close => {
            next.stage = Stage::Closed;
            next.voting_closes_at = Some(now);
        }
        TransitionKind::Cancel => {
            next.stage = Stage::Cancelled;
        }
    }
    Ok(Transitioned::changed(next))
}

/// Apply every time-driven transition that is due at `now`.
///
/// The three checks run in sequence on the same pass, so a poll whose
/// windows have all elapsed cascades through several stages in one
/// evaluation. A `None` window never fires. Pure: the caller persists the
/// result if `changed`.
pub fn apply_auto(poll: &Poll, now: Timestamp) -> Transitioned {
    let mut next = poll.clone();
    let mut changed = false;

    if next.stage == Stage::SubmissionOpen {
        if let Some(close) = next.submission_closes_at {
            if close.is_reached(now) {
                next.stage = Stage::Review;
                changed = true;
            }
        }
    }
    if next.stage == Stage::Review {
        if let Some(open) = next.voting_opens_at {
            if open.is_reached(now) {
                next.stage = Stage::VotingOpen;
                next.locked_at.get_or_insert(now);
                changed = true;
            }
        }
    }
    if next.stage == Stage::VotingOpen {
        if let Some(close) = next.voting_closes_at {
            if close.is_reached(now) {
                next.stage = Stage::Closed;
                changed = true;
            }
        }
    }

    if changed {
        Transitioned::changed(next)
    } else {
        Transitioned::unchanged(next)
    }
}

/// Change the voting method, if it is still editable.
///
/// Allowed while the poll is in Draft, SubmissionOpen or Review and the lock
/// marker is unset; `require_ranking` is re-derived on every edit.
pub fn set_voting_method(
    poll: &Poll,
    method: VotingMethod,
) -> Result<Transitioned, LifecycleError> {
    if !poll.method_editable() {
        return Err(LifecycleError::MethodLocked);
    }
    if poll.method == method {
        return Ok(Transitioned::unchanged(poll.clone()));
    }
    let mut next = poll.clone();
    next.method = method;
    Ok(Transitioned::changed(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::PollId;

    fn draft_poll() -> Poll {
        Poll::new(PollId::new(1), "photo contest", Timestamp::new(0))
    }

    fn poll_in(stage: Stage) -> Poll {
        let mut poll = draft_poll();
        poll.stage = stage;
        poll
    }

    #[test]
    fn full_manual_walk() {
        let now = Timestamp::new(100);
        let poll = draft_poll();

        let poll = apply_manual(&poll, TransitionKind::OpenSubmissions, now)
            .unwrap()
            .poll;
        assert_eq!(poll.stage, Stage::SubmissionOpen);
        assert_eq!(poll.submission_opens_at, Some(now));

        let now = Timestamp::new(200);
        let poll = apply_manual(&poll, TransitionKind::StartReview, now)
            .unwrap()
            .poll;
        assert_eq!(poll.stage, Stage::Review);
        assert_eq!(poll.submission_closes_at, Some(now));

        let now = Timestamp::new(300);
        let poll = apply_manual(&poll, TransitionKind::OpenVoting, now)
            .unwrap()
            .poll;
        assert_eq!(poll.stage, Stage::VotingOpen);
        assert_eq!(poll.voting_opens_at, Some(now));
        assert_eq!(poll.locked_at, Some(now));

        let now = Timestamp::new(400);
        let poll = apply_manual(&poll, TransitionKind::Close, now).unwrap().poll;
        assert_eq!(poll.stage, Stage::Closed);
        assert_eq!(poll.voting_closes_at, Some(now));
    }

    #[test]
    fn wrong_stage_names_the_required_stage() {
        let poll = draft_poll();
        let err = apply_manual(&poll, TransitionKind::OpenVoting, Timestamp::new(1)).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::WrongStage {
                required: Stage::Review,
                actual: Stage::Draft,
            }
        );
    }

    #[test]
    fn transition_to_current_stage_is_unchanged() {
        let poll = poll_in(Stage::Review);
        let result = apply_manual(&poll, TransitionKind::StartReview, Timestamp::new(1)).unwrap();
        assert!(!result.changed);
        assert_eq!(result.poll, poll);
    }

    #[test]
    fn open_submissions_keeps_past_open_time() {
        let mut poll = draft_poll();
        poll.submission_opens_at = Some(Timestamp::new(50));
        let result = apply_manual(&poll, TransitionKind::OpenSubmissions, Timestamp::new(100))
            .unwrap();
        assert_eq!(result.poll.submission_opens_at, Some(Timestamp::new(50)));
    }

    #[test]
    fn open_submissions_pulls_future_open_time_to_now() {
        let mut poll = draft_poll();
        poll.submission_opens_at = Some(Timestamp::new(500));
        let result = apply_manual(&poll, TransitionKind::OpenSubmissions, Timestamp::new(100))
            .unwrap();
        assert_eq!(result.poll.submission_opens_at, Some(Timestamp::new(100)));
    }

    #[test]
    fn open_voting_pins_unset_submission_close() {
        let poll = poll_in(Stage::Review);
        let now = Timestamp::new(300);
        let result = apply_manual(&poll, TransitionKind::OpenVoting, now).unwrap();
        assert_eq!(result.poll.submission_closes_at, Some(now));
    }

    #[test]
    fn cancel_from_every_pre_closed_stage() {
        for stage in [
            Stage::Draft,
            Stage::SubmissionOpen,
            Stage::Review,
            Stage::VotingOpen,
        ] {
            let poll = poll_in(stage);
            let result = apply_manual(&poll, TransitionKind::Cancel, Timestamp::new(1)).unwrap();
            assert_eq!(result.poll.stage, Stage::Cancelled);
            assert!(result.changed);
        }
    }

    #[test]
    fn cancel_is_idempotent_but_not_allowed_after_close() {
        let cancelled = poll_in(Stage::Cancelled);
        let result = apply_manual(&cancelled, TransitionKind::Cancel, Timestamp::new(1)).unwrap();
        assert!(!result.changed);

        let closed = poll_in(Stage::Closed);
        let err = apply_manual(&closed, TransitionKind::Cancel, Timestamp::new(1)).unwrap_err();
        assert_eq!(err, LifecycleError::CancelAfterClose);
    }

    #[test]
    fn auto_advances_when_window_elapses() {
        let mut poll = poll_in(Stage::SubmissionOpen);
        poll.submission_closes_at = Some(Timestamp::new(100));

        let result = apply_auto(&poll, Timestamp::new(99));
        assert!(!result.changed);
        assert_eq!(result.poll.stage, Stage::SubmissionOpen);

        let result = apply_auto(&poll, Timestamp::new(100));
        assert!(result.changed);
        assert_eq!(result.poll.stage, Stage::Review);
    }

    #[test]
    fn auto_cascades_through_multiple_stages() {
        let mut poll = poll_in(Stage::SubmissionOpen);
        poll.submission_closes_at = Some(Timestamp::new(100));
        poll.voting_opens_at = Some(Timestamp::new(200));
        poll.voting_closes_at = Some(Timestamp::new(300));

        let result = apply_auto(&poll, Timestamp::new(250));
        assert!(result.changed);
        assert_eq!(result.poll.stage, Stage::VotingOpen);
        assert_eq!(result.poll.locked_at, Some(Timestamp::new(250)));

        let result = apply_auto(&poll, Timestamp::new(1000));
        assert!(result.changed);
        assert_eq!(result.poll.stage, Stage::Closed);
    }

    #[test]
    fn missing_close_window_never_auto_advances() {
        let mut poll = poll_in(Stage::SubmissionOpen);
        poll.submission_closes_at = None;
        let result = apply_auto(&poll, Timestamp::new(u64::MAX));
        assert!(!result.changed);
        assert_eq!(result.poll.stage, Stage::SubmissionOpen);
    }

    #[test]
    fn auto_does_not_overwrite_existing_lock() {
        let mut poll = poll_in(Stage::Review);
        poll.voting_opens_at = Some(Timestamp::new(100));
        poll.locked_at = Some(Timestamp::new(50));
        let result = apply_auto(&poll, Timestamp::new(150));
        assert_eq!(result.poll.locked_at, Some(Timestamp::new(50)));
    }

    #[test]
    fn transitions_recompute_require_ranking() {
        let mut poll = poll_in(Stage::Review);
        poll.method = VotingMethod::Irv;
        // Simulate a stale stored flag.
        poll.require_ranking = false;
        poll.voting_opens_at = Some(Timestamp::new(100));

        let result = apply_auto(&poll, Timestamp::new(100));
        assert!(result.poll.require_ranking);
    }

    #[test]
    fn method_edit_respects_lock() {
        let poll = draft_poll();
        let result = set_voting_method(&poll, VotingMethod::Irv).unwrap();
        assert!(result.changed);
        assert!(result.poll.require_ranking);

        let mut locked = result.poll;
        locked.locked_at = Some(Timestamp::new(10));
        assert_eq!(
            set_voting_method(&locked, VotingMethod::Approval).unwrap_err(),
            LifecycleError::MethodLocked
        );
    }

    #[test]
    fn method_edit_to_same_value_is_unchanged() {
        let poll = draft_poll();
        let result = set_voting_method(&poll, VotingMethod::Approval).unwrap();
        assert!(!result.changed);
    }
}
