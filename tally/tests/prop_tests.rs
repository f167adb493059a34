use proptest::prelude::*;

use agora_tally::{tally_approval, tally_irv};
use agora_types::{Ballot, BallotId, Choice, Entry, EntryId, MemberId, PollId, Timestamp};

fn make_entries(n: u64) -> Vec<Entry> {
    (1..=n)
        .map(|i| Entry {
            id: EntryId::new(i),
            poll: PollId::new(1),
            owner: MemberId::new(i),
            title: format!("e{i}"),
            description: String::new(),
            original_asset: None,
            public_asset: None,
            teaser_asset: None,
            disqualified: None,
            created_at: Timestamp::new(i),
        })
        .collect()
}

fn approval_ballots(picks: &[Vec<u64>]) -> Vec<Ballot> {
    picks
        .iter()
        .enumerate()
        .map(|(i, entries)| Ballot {
            id: BallotId::new(i as u64 + 1),
            poll: PollId::new(1),
            member: MemberId::new(i as u64 + 1),
            submitted_at: Timestamp::new(0),
            is_final: true,
            choices: entries
                .iter()
                .map(|&e| Choice {
                    entry: EntryId::new(e),
                    rank: None,
                })
                .collect(),
        })
        .collect()
}

fn ranked_ballots(prefs: &[Vec<u64>]) -> Vec<Ballot> {
    prefs
        .iter()
        .enumerate()
        .map(|(i, entries)| Ballot {
            id: BallotId::new(i as u64 + 1),
            poll: PollId::new(1),
            member: MemberId::new(i as u64 + 1),
            submitted_at: Timestamp::new(0),
            is_final: true,
            choices: entries
                .iter()
                .enumerate()
                .map(|(r, &e)| Choice {
                    entry: EntryId::new(e),
                    rank: Some(r as u32 + 1),
                })
                .collect(),
        })
        .collect()
}

/// Distinct entry-id subsets of 1..=n, as ballots.
fn pick_strategy(n: u64, ballots: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    proptest::collection::vec(
        proptest::collection::hash_set(1..=n, 1..=(n as usize)),
        0..ballots,
    )
    .prop_map(|sets| sets.into_iter().map(|s| s.into_iter().collect()).collect())
}

proptest! {
    /// Approval winners are exactly the argmax set of the counts.
    #[test]
    fn approval_winners_are_the_argmax_set(picks in pick_strategy(6, 12)) {
        let entries = make_entries(6);
        let ballots = approval_ballots(&picks);
        let tally = tally_approval(&entries, &ballots);

        if ballots.is_empty() {
            prop_assert!(tally.winners.is_empty());
        } else {
            let max = tally.counts.values().copied().max().unwrap_or(0);
            let mut expected: Vec<EntryId> = tally
                .counts
                .iter()
                .filter(|(_, &c)| c == max)
                .map(|(&e, _)| e)
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(tally.winners.clone(), expected);
        }
    }

    /// The total approval count never exceeds ballots × selections.
    #[test]
    fn approval_counts_are_bounded(picks in pick_strategy(6, 12)) {
        let entries = make_entries(6);
        let ballots = approval_ballots(&picks);
        let tally = tally_approval(&entries, &ballots);

        let total: u64 = tally.counts.values().sum();
        let cast: u64 = ballots.iter().map(|b| b.choices.len() as u64).sum();
        prop_assert!(total <= cast);
    }

    /// IRV always terminates and returns winners from the entry set
    /// whenever any ballots were cast.
    #[test]
    fn irv_terminates_with_winners_from_the_field(prefs in pick_strategy(5, 10)) {
        let entries = make_entries(5);
        let ballots = ranked_ballots(&prefs);
        let tally = tally_irv(&entries, &ballots);

        if ballots.is_empty() {
            prop_assert!(tally.winners.is_empty());
        } else {
            prop_assert!(!tally.winners.is_empty());
            for winner in &tally.winners {
                prop_assert!(winner.as_u64() >= 1 && winner.as_u64() <= 5);
            }
            // Rounds are bounded by the field size.
            prop_assert!(tally.rounds.len() <= 5);
        }
    }

    /// A strict first-round majority short-circuits: one round, one winner.
    #[test]
    fn irv_majority_wins_in_one_round(extra in 0u64..4) {
        let entries = make_entries(3);
        // entry 1 holds extra+3 of the (extra+3)+2 ballots — always a majority.
        let mut prefs: Vec<Vec<u64>> = (0..extra + 3).map(|_| vec![1, 2]).collect();
        prefs.push(vec![2, 3]);
        prefs.push(vec![3, 2]);
        let ballots = ranked_ballots(&prefs);
        let tally = tally_irv(&entries, &ballots);

        prop_assert_eq!(tally.winners.clone(), vec![EntryId::new(1)]);
        prop_assert_eq!(tally.rounds.len(), 1);
    }
}
