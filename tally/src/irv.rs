//! Instant-runoff elimination.

use agora_types::{Ballot, Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One counting round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IrvRound {
    /// First-preference counts over the entries still active this round.
    pub counts: HashMap<EntryId, u64>,
    /// Entries eliminated at the end of this round (empty on the final one).
    pub eliminated: Vec<EntryId>,
}

/// The result of an instant-runoff count.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IrvTally {
    pub rounds: Vec<IrvRound>,
    /// Majority winner, or every member of a terminal tie, ascending by id.
    /// Empty when no ballots were cast or every entry is disqualified.
    pub winners: Vec<EntryId>,
    /// The last round's counts restricted to the entries that survived it.
    pub final_counts: HashMap<EntryId, u64>,
    /// Each entry's count in the round it left the race (final count for
    /// survivors). A winner's count never decreases across rounds, so
    /// winners always top this map; used to rank entries for display.
    pub scores: HashMap<EntryId, u64>,
}

/// Run instant-runoff over the poll's ballots.
///
/// Each ballot is read as its choices ordered by rank ascending, restricted
/// to still-active entries. Per round: every ballot with at least one active
/// choice counts toward its first; an entry holding a strict majority of the
/// round's ballots wins (along with anything tied with it at the top); a
/// full tie across every active entry ends the race with all of them tied;
/// otherwise every entry at the round minimum is eliminated and the next
/// round begins.
pub fn tally_irv(entries: &[Entry], ballots: &[Ballot]) -> IrvTally {
    let mut active: HashSet<EntryId> = entries
        .iter()
        .filter(|e| !e.is_disqualified())
        .map(|e| e.id)
        .collect();

    if active.is_empty() || ballots.is_empty() {
        return IrvTally::default();
    }

    // Each ballot as an entry-id preference list, best rank first.
    let preferences: Vec<Vec<EntryId>> = ballots
        .iter()
        .map(|b| {
            b.ordered_choices()
                .iter()
                .map(|c| c.entry)
                .filter(|e| active.contains(e))
                .collect()
        })
        .collect();

    let mut tally = IrvTally::default();

    loop {
        let mut counts: HashMap<EntryId, u64> = active.iter().map(|&e| (e, 0)).collect();
        let mut cast: u64 = 0;
        for prefs in &preferences {
            if let Some(first) = prefs.iter().find(|e| active.contains(*e)) {
                cast += 1;
                *counts.get_mut(first).expect("first choice is active") += 1;
            }
        }

        let max = counts.values().copied().max().unwrap_or(0);
        let min = counts.values().copied().min().unwrap_or(0);

        // Strict majority of the ballots counted this round.
        if 2 * max > cast {
            let mut winners: Vec<EntryId> = counts
                .iter()
                .filter(|(_, &c)| c == max)
                .map(|(&e, _)| e)
                .collect();
            winners.sort_unstable();
            for (&entry, &count) in &counts {
                tally.scores.insert(entry, count);
            }
            tally.final_counts = counts.clone();
            tally.rounds.push(IrvRound {
                counts,
                eliminated: Vec::new(),
            });
            tally.winners = winners;
            return tally;
        }

        // Every active entry tied with every other: a terminal tie.
        if max == min {
            let mut winners: Vec<EntryId> = active.iter().copied().collect();
            winners.sort_unstable();
            for (&entry, &count) in &counts {
                tally.scores.insert(entry, count);
            }
            tally.final_counts = counts.clone();
            tally.rounds.push(IrvRound {
                counts,
                eliminated: Vec::new(),
            });
            tally.winners = winners;
            return tally;
        }

        // Eliminate the whole bottom tier at once.
        let mut eliminated: Vec<EntryId> = counts
            .iter()
            .filter(|(_, &c)| c == min)
            .map(|(&e, _)| e)
            .collect();
        eliminated.sort_unstable();
        for entry in &eliminated {
            active.remove(entry);
            tally.scores.insert(*entry, min);
        }

        let survivors_left = active.len();
        tally.final_counts = counts
            .iter()
            .filter(|(e, _)| active.contains(e))
            .map(|(&e, &c)| (e, c))
            .collect();
        tally.rounds.push(IrvRound { counts, eliminated });

        if survivors_left <= 1 {
            let mut winners: Vec<EntryId> = active.iter().copied().collect();
            winners.sort_unstable();
            for (&entry, &count) in &tally.final_counts {
                tally.scores.insert(entry, count);
            }
            tally.winners = winners;
            return tally;
        }
    }
}
