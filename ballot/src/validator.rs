//! The submission rule chain.

use crate::error::VoteError;
use agora_eligibility::{check, Gate};
use agora_types::{Choice, Entry, MemberProfile, Poll, Timestamp, VotingMethod};
use std::collections::HashSet;

/// Validate a vote submission against the poll's rules.
///
/// `entries` is the poll's full entry set; `choices` is the ballot as
/// submitted. Checks run in a fixed order and the first failure wins:
/// eligibility, voting window, selection count, duplicates, entry
/// membership/disqualification, then rank shape. On success the choice set
/// is returned unchanged, ready to be written as the member's ballot.
pub fn validate(
    poll: &Poll,
    profile: &MemberProfile,
    entries: &[Entry],
    choices: &[Choice],
    now: Timestamp,
) -> Result<Vec<Choice>, VoteError> {
    let eligibility = check(Gate::of(poll), profile);
    if !eligibility.is_eligible() {
        return Err(VoteError::NotEligible(eligibility));
    }

    if !voting_window_open(poll, now) {
        return Err(VoteError::VotingClosed);
    }

    if choices.is_empty() {
        return Err(VoteError::NoChoices);
    }
    if choices.len() > poll.max_selections as usize {
        return Err(VoteError::TooManyChoices {
            max: poll.max_selections,
        });
    }

    let mut seen = HashSet::new();
    for choice in choices {
        if !seen.insert(choice.entry) {
            return Err(VoteError::DuplicateChoice(choice.entry));
        }
    }

    for choice in choices {
        let entry = entries
            .iter()
            .find(|e| e.id == choice.entry && e.poll == poll.id)
            .ok_or(VoteError::UnknownEntry(choice.entry))?;
        if entry.is_disqualified() {
            return Err(VoteError::DisqualifiedEntry(choice.entry));
        }
    }

    match poll.method {
        VotingMethod::Irv => validate_ranks(choices)?,
        VotingMethod::Approval => {
            if let Some(ranked) = choices.iter().find(|c| c.rank.is_some()) {
                return Err(VoteError::UnexpectedRank(ranked.entry));
            }
        }
    }

    Ok(choices.to_vec())
}

/// Ranks must be present on every choice and cover exactly `1..=count`.
fn validate_ranks(choices: &[Choice]) -> Result<(), VoteError> {
    let count = choices.len() as u32;
    let mut seen = HashSet::new();
    for choice in choices {
        let rank = choice.rank.ok_or(VoteError::MissingRank(choice.entry))?;
        if rank < 1 || rank > count {
            return Err(VoteError::RankOutOfRange { rank, count });
        }
        if !seen.insert(rank) {
            return Err(VoteError::DuplicateRank(rank));
        }
    }
    // `count` distinct values in 1..=count is exactly {1..=count}.
    Ok(())
}

fn voting_window_open(poll: &Poll, now: Timestamp) -> bool {
    if !poll.stage.accepts_votes() {
        return false;
    }
    if let Some(opens) = poll.voting_opens_at {
        if opens.is_future(now) {
            return false;
        }
    }
    if let Some(closes) = poll.voting_closes_at {
        if closes.is_reached(now) {
            return false;
        }
    }
    true
}
