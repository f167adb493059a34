//! Rank-count histograms for tally display.

use agora_types::{Ballot, Entry, EntryId};
use std::collections::{BTreeMap, HashMap};

/// Count, per entry, how many ballots placed it at each explicit rank.
///
/// Computed directly from raw choices, independent of IRV elimination, so a
/// display can always show "n first-place votes, m second-place votes" even
/// for entries that left the race early. Unranked (approval) choices do not
/// appear here. Disqualified entries are included; exposure is the caller's
/// concern.
pub fn rank_histograms(
    entries: &[Entry],
    ballots: &[Ballot],
) -> HashMap<EntryId, BTreeMap<u32, u64>> {
    let mut histograms: HashMap<EntryId, BTreeMap<u32, u64>> =
        entries.iter().map(|e| (e.id, BTreeMap::new())).collect();

    for ballot in ballots {
        for choice in &ballot.choices {
            if let Some(rank) = choice.rank {
                if let Some(histogram) = histograms.get_mut(&choice.entry) {
                    *histogram.entry(rank).or_insert(0) += 1;
                }
            }
        }
    }

    histograms
}
