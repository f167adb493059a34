use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use agora_tally::{tally_approval, tally_irv};
use agora_types::{Ballot, BallotId, Choice, Entry, EntryId, MemberId, PollId, Timestamp};

fn make_entries(n: u64) -> Vec<Entry> {
    (1..=n)
        .map(|i| Entry {
            id: EntryId::new(i),
            poll: PollId::new(1),
            owner: MemberId::new(i),
            title: format!("entry-{i}"),
            description: String::new(),
            original_asset: None,
            public_asset: None,
            teaser_asset: None,
            disqualified: None,
            created_at: Timestamp::new(i),
        })
        .collect()
}

/// Deterministic spread of ranked ballots over `entries` candidates.
fn make_ranked_ballots(ballots: u64, entries: u64) -> Vec<Ballot> {
    (0..ballots)
        .map(|i| {
            let first = i % entries;
            let second = (i + 1) % entries;
            let third = (i + 3) % entries;
            let mut picks = vec![first, second];
            if third != first && third != second {
                picks.push(third);
            }
            Ballot {
                id: BallotId::new(i + 1),
                poll: PollId::new(1),
                member: MemberId::new(i + 1),
                submitted_at: Timestamp::new(0),
                is_final: true,
                choices: picks
                    .iter()
                    .enumerate()
                    .map(|(r, &e)| Choice {
                        entry: EntryId::new(e + 1),
                        rank: Some(r as u32 + 1),
                    })
                    .collect(),
            }
        })
        .collect()
}

fn make_approval_ballots(ballots: u64, entries: u64) -> Vec<Ballot> {
    make_ranked_ballots(ballots, entries)
        .into_iter()
        .map(|mut b| {
            for choice in &mut b.choices {
                choice.rank = None;
            }
            b
        })
        .collect()
}

fn bench_approval(c: &mut Criterion) {
    let mut group = c.benchmark_group("approval");
    let entries = make_entries(20);

    for ballot_count in [10, 100, 1000, 10_000] {
        let ballots = make_approval_ballots(ballot_count, 20);
        group.bench_with_input(
            BenchmarkId::new("tally_approval", ballot_count),
            &ballot_count,
            |b, _| {
                b.iter(|| black_box(tally_approval(black_box(&entries), black_box(&ballots))));
            },
        );
    }

    group.finish();
}

fn bench_irv(c: &mut Criterion) {
    let mut group = c.benchmark_group("irv");

    for entry_count in [5, 20, 50] {
        let entries = make_entries(entry_count);
        let ballots = make_ranked_ballots(1000, entry_count);
        group.bench_with_input(
            BenchmarkId::new("tally_irv", entry_count),
            &entry_count,
            |b, _| {
                b.iter(|| black_box(tally_irv(black_box(&entries), black_box(&ballots))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_approval, bench_irv);
criterion_main!(benches);
