//! Approval counting.

use agora_types::{Ballot, Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The result of an approval count.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApprovalTally {
    /// Ballots approving each non-disqualified entry. Entries nobody
    /// approved are present with a zero count.
    pub counts: HashMap<EntryId, u64>,
    /// Every entry at the maximum count, ascending by id. Empty when no
    /// ballots were cast or every entry is disqualified.
    pub winners: Vec<EntryId>,
}

/// Count one approval per ballot per selected entry.
pub fn tally_approval(entries: &[Entry], ballots: &[Ballot]) -> ApprovalTally {
    let mut counts: HashMap<EntryId, u64> = entries
        .iter()
        .filter(|e| !e.is_disqualified())
        .map(|e| (e.id, 0))
        .collect();

    for ballot in ballots {
        for choice in &ballot.choices {
            if let Some(count) = counts.get_mut(&choice.entry) {
                *count += 1;
            }
        }
    }

    let winners = if ballots.is_empty() {
        Vec::new()
    } else {
        let max = counts.values().copied().max().unwrap_or(0);
        let mut winners: Vec<EntryId> = counts
            .iter()
            .filter(|(_, &count)| count == max)
            .map(|(&id, _)| id)
            .collect();
        winners.sort_unstable();
        winners
    };

    ApprovalTally { counts, winners }
}
