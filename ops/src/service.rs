//! The poll service: one method per operation contract.

use crate::error::{OpError, OpResult};
use crate::view::{
    BallotView, Caller, EntrySubmission, EntryView, MetadataPatch, PollDetail, PollDraft,
    PollSummary, SubmissionSettingsPatch, VotingSettingsPatch,
};
use agora_eligibility::{check, Eligibility, Gate};
use agora_lifecycle::{apply_auto, apply_manual, set_voting_method, TransitionKind};
use agora_store::{
    AssetCatalog, BallotStore, CancelToken, EntryStore, MemberRoster, PollStore, Versioned,
};
use agora_tally::{rank_histograms, tally_approval, tally_irv};
use agora_types::{
    Ballot, Choice, Entry, EntryId, MemberId, MemberProfile, Poll, PollId, Stage, Timestamp,
    VotingMethod,
};
use agora_visibility::{blind_shuffle, exposure, ranked_sort, Relation};
use std::collections::HashMap;

/// Operation surface over a poll snapshot.
///
/// Holds only trait references; every method takes the caller identity, the
/// current time, and a cancellation token, and runs synchronously over
/// whatever the stores return.
pub struct PollService<'a> {
    polls: &'a dyn PollStore,
    entries: &'a dyn EntryStore,
    ballots: &'a dyn BallotStore,
    roster: &'a dyn MemberRoster,
    assets: &'a dyn AssetCatalog,
}

impl<'a> PollService<'a> {
    pub fn new(
        polls: &'a dyn PollStore,
        entries: &'a dyn EntryStore,
        ballots: &'a dyn BallotStore,
        roster: &'a dyn MemberRoster,
        assets: &'a dyn AssetCatalog,
    ) -> Self {
        Self {
            polls,
            entries,
            ballots,
            roster,
            assets,
        }
    }

    // ---- poll CRUD ----

    pub fn create_poll(
        &self,
        caller: Caller,
        draft: &PollDraft,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        require_admin(caller)?;
        if draft.title.trim().is_empty() {
            return Err(OpError::bad_request("a poll title is required"));
        }

        let id = self.polls.allocate_poll_id(cancel)?;
        let mut poll = Poll::new(id, draft.title.trim(), now);
        poll.description = draft.description.clone();
        self.polls.put_poll(&poll, None, cancel)?;
        tracing::info!(poll = %id, title = %poll.title, "poll created");

        self.summarize(&poll, caller, now, cancel)
    }

    pub fn delete_poll(
        &self,
        caller: Caller,
        poll_id: PollId,
        cancel: &CancelToken,
    ) -> OpResult<()> {
        require_admin(caller)?;
        if self.polls.get_poll(poll_id, cancel)?.is_none() {
            return Err(OpError::NotFound);
        }
        self.polls.delete_poll(poll_id, cancel)?;
        tracing::info!(poll = %poll_id, "poll deleted");
        Ok(())
    }

    pub fn get_poll(
        &self,
        caller: Caller,
        poll_id: PollId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        let stored = self.load_poll(poll_id, now, cancel)?;
        self.summarize(&stored.value, caller, now, cancel)
    }

    /// The most recently created poll members can currently interact with.
    pub fn get_active_poll(
        &self,
        caller: Caller,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<Option<PollSummary>> {
        let mut candidates: Vec<Poll> = self
            .polls
            .list_polls(cancel)?
            .into_iter()
            .map(|p| apply_auto(&p, now).poll)
            .filter(|p| {
                matches!(
                    p.stage,
                    Stage::SubmissionOpen | Stage::Review | Stage::VotingOpen
                )
            })
            .collect();
        candidates.sort_by_key(|p| (p.created_at, p.id));

        match candidates.pop() {
            // Re-read through the normal path so the transition is persisted.
            Some(poll) => Ok(Some(self.get_poll(caller, poll.id, now, cancel)?)),
            None => Ok(None),
        }
    }

    pub fn get_poll_detail(
        &self,
        caller: Caller,
        poll_id: PollId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollDetail> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let summary = self.summarize(&poll, caller, now, cancel)?;
        let (entries, winners) = self.entry_views(caller, &poll, cancel)?;
        Ok(PollDetail {
            poll: summary,
            entries,
            winners,
        })
    }

    pub fn list_entries(
        &self,
        caller: Caller,
        poll_id: PollId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<Vec<EntryView>> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let (entries, _) = self.entry_views(caller, &poll, cancel)?;
        Ok(entries)
    }

    // ---- entries ----

    pub fn submit_entry(
        &self,
        caller: Caller,
        poll_id: PollId,
        submission: &EntrySubmission,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<EntryView> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;

        if !submission_window_open(&poll, now) {
            return Err(OpError::forbidden("submissions are not open for this poll"));
        }

        let profile = self.require_profile(caller.member, cancel)?;
        let eligibility = check(Gate::of(&poll), &profile);
        if !eligibility.is_eligible() {
            return Err(OpError::Forbidden(eligibility.to_string()));
        }

        let mine = self
            .entries
            .entries_for_poll(poll.id, cancel)?
            .iter()
            .filter(|e| e.is_owned_by(caller.member))
            .count();
        if mine >= poll.max_submissions_per_member as usize {
            return Err(OpError::forbidden(format!(
                "submission limit reached ({} per member)",
                poll.max_submissions_per_member
            )));
        }

        let title = self.checked_field(
            "title",
            poll.title_field,
            submission.title.as_deref(),
        )?;
        let description = self.checked_field(
            "description",
            poll.description_field,
            submission.description.as_deref(),
        )?;

        if poll.image_field.is_required() && submission.original_asset.is_none() {
            return Err(OpError::bad_request("an image is required for this poll"));
        }
        if poll.image_field.is_off() && submission.original_asset.is_some() {
            return Err(OpError::bad_request("this poll does not accept images"));
        }
        if let Some(asset) = &submission.original_asset {
            if !self.assets.exists(asset, cancel)? {
                return Err(OpError::bad_request(format!(
                    "image asset {asset} does not exist"
                )));
            }
        }

        let entry = Entry {
            id: self.entries.allocate_entry_id(cancel)?,
            poll: poll.id,
            owner: caller.member,
            title,
            description,
            original_asset: submission.original_asset.clone(),
            public_asset: submission.public_asset.clone(),
            teaser_asset: submission.teaser_asset.clone(),
            disqualified: None,
            created_at: now,
        };
        self.entries.put_entry(&entry, cancel)?;
        tracing::info!(poll = %poll.id, entry = %entry.id, owner = %caller.member, "entry submitted");

        self.single_entry_view(caller, &poll, entry, cancel)
    }

    pub fn delete_entry(
        &self,
        caller: Caller,
        poll_id: PollId,
        entry_id: EntryId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<()> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let entry = self.require_entry(&poll, entry_id, cancel)?;

        if !caller.is_admin {
            if !entry.is_owned_by(caller.member) {
                return Err(OpError::forbidden("only the owner or an admin may delete an entry"));
            }
            if !poll.stage.accepts_submissions() {
                return Err(OpError::forbidden(
                    "entries can only be withdrawn while submissions are open",
                ));
            }
        }

        self.entries.delete_entry(entry.id, cancel)?;
        let purged = self.ballots.purge_entry_choices(poll.id, entry.id, cancel)?;
        tracing::info!(
            poll = %poll.id,
            entry = %entry.id,
            purged_choices = purged,
            "entry deleted"
        );
        Ok(())
    }

    pub fn disqualify_entry(
        &self,
        caller: Caller,
        poll_id: PollId,
        entry_id: EntryId,
        reason: Option<String>,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<EntryView> {
        require_admin(caller)?;
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let mut entry = self.require_entry(&poll, entry_id, cancel)?;

        entry.disqualify(reason.unwrap_or_default(), caller.member, now);
        self.entries.put_entry(&entry, cancel)?;
        tracing::info!(poll = %poll.id, entry = %entry.id, "entry disqualified");

        self.single_entry_view(caller, &poll, entry, cancel)
    }

    pub fn requalify_entry(
        &self,
        caller: Caller,
        poll_id: PollId,
        entry_id: EntryId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<EntryView> {
        require_admin(caller)?;
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let mut entry = self.require_entry(&poll, entry_id, cancel)?;

        entry.requalify();
        self.entries.put_entry(&entry, cancel)?;
        tracing::info!(poll = %poll.id, entry = %entry.id, "entry requalified");

        self.single_entry_view(caller, &poll, entry, cancel)
    }

    // ---- voting ----

    pub fn submit_vote(
        &self,
        caller: Caller,
        poll_id: PollId,
        choices: &[Choice],
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<BallotView> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let profile = self.require_profile(caller.member, cancel)?;
        let entries = self.entries.entries_for_poll(poll.id, cancel)?;

        let accepted = match agora_ballot::validate(&poll, &profile, &entries, choices, now) {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::debug!(poll = %poll.id, voter = %caller.member, error = %err, "vote rejected");
                return Err(err.into());
            }
        };

        // Resubmission keeps the ballot id and replaces the whole choice set.
        let existing = self.ballots.ballot_for_member(poll.id, caller.member, cancel)?;
        let replacing = existing.is_some();
        let id = match existing {
            Some(prior) => prior.id,
            None => self.ballots.allocate_ballot_id(cancel)?,
        };
        let ballot = Ballot {
            id,
            poll: poll.id,
            member: caller.member,
            submitted_at: now,
            is_final: true,
            choices: accepted,
        };
        self.ballots.upsert_ballot(&ballot, cancel)?;
        tracing::info!(
            poll = %poll.id,
            voter = %caller.member,
            choices = ballot.choices.len(),
            replaced = replacing,
            "ballot cast"
        );

        Ok(ballot_view(&ballot))
    }

    pub fn get_vote(
        &self,
        caller: Caller,
        poll_id: PollId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<Option<BallotView>> {
        let poll = self.load_poll(poll_id, now, cancel)?.value;
        let ballot = self.ballots.ballot_for_member(poll.id, caller.member, cancel)?;
        Ok(ballot.as_ref().map(ballot_view))
    }

    // ---- lifecycle & settings ----

    pub fn transition(
        &self,
        caller: Caller,
        poll_id: PollId,
        kind: TransitionKind,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        require_admin(caller)?;
        let stored = self.load_poll(poll_id, now, cancel)?;
        let from = stored.value.stage;

        let result = apply_manual(&stored.value, kind, now)?;
        let poll = if result.changed {
            let persisted = self.persist_transition(result.poll, stored.version, cancel)?;
            tracing::info!(
                poll = %persisted.value.id,
                from = ?from,
                to = ?persisted.value.stage,
                "manual stage transition"
            );
            persisted.value
        } else {
            result.poll
        };

        self.summarize(&poll, caller, now, cancel)
    }

    pub fn update_metadata(
        &self,
        caller: Caller,
        poll_id: PollId,
        patch: &MetadataPatch,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        require_admin(caller)?;
        let stored = self.load_poll(poll_id, now, cancel)?;
        let mut poll = stored.value;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(OpError::bad_request("a poll title is required"));
            }
            poll.title = title.trim().to_owned();
        }
        if let Some(description) = &patch.description {
            poll.description = description.clone();
        }

        self.polls.put_poll(&poll, Some(stored.version), cancel)?;
        self.summarize(&poll, caller, now, cancel)
    }

    pub fn update_submission_settings(
        &self,
        caller: Caller,
        poll_id: PollId,
        patch: &SubmissionSettingsPatch,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        require_admin(caller)?;
        let stored = self.load_poll(poll_id, now, cancel)?;
        let mut poll = stored.value;

        if poll.locked_at.is_some() || poll.stage.is_terminal() {
            return Err(OpError::bad_request(
                "submission settings are locked once voting opens",
            ));
        }

        if let Some(req) = patch.title_field {
            poll.title_field = req;
        }
        if let Some(req) = patch.description_field {
            poll.description_field = req;
        }
        if let Some(req) = patch.image_field {
            poll.image_field = req;
        }
        if let Some(cap) = patch.max_submissions_per_member {
            if cap == 0 {
                return Err(OpError::bad_request(
                    "max submissions per member must be at least 1",
                ));
            }
            poll.max_submissions_per_member = cap;
        }
        if let Some(window) = patch.submission_opens_at {
            poll.submission_opens_at = window;
        }
        if let Some(window) = patch.submission_closes_at {
            poll.submission_closes_at = window;
        }
        if let Some(roles) = &patch.required_roles {
            poll.required_roles = roles.clone();
        }
        if let Some(cutoff) = patch.joined_before {
            poll.joined_before = cutoff;
        }

        self.polls.put_poll(&poll, Some(stored.version), cancel)?;
        self.summarize(&poll, caller, now, cancel)
    }

    pub fn update_voting_settings(
        &self,
        caller: Caller,
        poll_id: PollId,
        patch: &VotingSettingsPatch,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        require_admin(caller)?;
        let stored = self.load_poll(poll_id, now, cancel)?;
        let mut poll = stored.value;

        if poll.stage.is_terminal() {
            return Err(OpError::bad_request("the poll is no longer editable"));
        }

        if let Some(method) = patch.method {
            poll = set_voting_method(&poll, method)?.poll;
        }
        if let Some(cap) = patch.max_selections {
            if cap == 0 {
                return Err(OpError::bad_request("max selections must be at least 1"));
            }
            poll.max_selections = cap;
        }
        if let Some(window) = patch.voting_opens_at {
            poll.voting_opens_at = window;
        }
        if let Some(window) = patch.voting_closes_at {
            poll.voting_closes_at = window;
        }

        self.polls.put_poll(&poll, Some(stored.version), cancel)?;
        self.summarize(&poll, caller, now, cancel)
    }

    // ---- internals ----

    /// Load a poll, applying any due time-driven transitions.
    ///
    /// Transitions are persisted immediately; a version conflict on that
    /// write means a concurrent reader already applied the same transition,
    /// so it is logged and discarded, and we proceed with our (identical)
    /// in-memory copy.
    fn load_poll(
        &self,
        id: PollId,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<Versioned<Poll>> {
        let stored = self.polls.get_poll(id, cancel)?.ok_or(OpError::NotFound)?;
        let result = apply_auto(&stored.value, now);
        if !result.changed {
            return Ok(stored);
        }

        let from = stored.value.stage;
        let persisted = self.persist_transition(result.poll, stored.version, cancel)?;
        tracing::info!(
            poll = %id,
            from = ?from,
            to = ?persisted.value.stage,
            "time-driven stage transition"
        );
        Ok(persisted)
    }

    /// Write a transitioned poll, swallowing optimistic-concurrency races.
    ///
    /// A conflict means a concurrent reader applied the same deterministic
    /// transition first; their copy is authoritative, so re-read it instead
    /// of surfacing or retrying.
    fn persist_transition(
        &self,
        poll: Poll,
        expected: u64,
        cancel: &CancelToken,
    ) -> OpResult<Versioned<Poll>> {
        match self.polls.put_poll(&poll, Some(expected), cancel) {
            Ok(version) => Ok(Versioned::new(poll, version)),
            Err(err) if err.is_conflict() => {
                tracing::debug!(poll = %poll.id, "transition already applied by a concurrent reader");
                match self.polls.get_poll(poll.id, cancel)? {
                    Some(fresh) => Ok(fresh),
                    None => Ok(Versioned::new(poll, expected)),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    fn require_profile(
        &self,
        member: MemberId,
        cancel: &CancelToken,
    ) -> OpResult<MemberProfile> {
        self.roster
            .profile(member, cancel)?
            .ok_or_else(|| OpError::forbidden("not a member of this community"))
    }

    fn require_entry(
        &self,
        poll: &Poll,
        entry_id: EntryId,
        cancel: &CancelToken,
    ) -> OpResult<Entry> {
        let entry = self
            .entries
            .get_entry(entry_id, cancel)?
            .ok_or(OpError::NotFound)?;
        if entry.poll != poll.id {
            return Err(OpError::NotFound);
        }
        Ok(entry)
    }

    fn summarize(
        &self,
        poll: &Poll,
        caller: Caller,
        now: Timestamp,
        cancel: &CancelToken,
    ) -> OpResult<PollSummary> {
        let profile = self.roster.profile(caller.member, cancel)?;
        let eligible = profile
            .as_ref()
            .map(|p| check(Gate::of(poll), p) == Eligibility::Eligible)
            .unwrap_or(false);

        let can_submit = eligible && submission_window_open(poll, now) && {
            let mine = self
                .entries
                .entries_for_poll(poll.id, cancel)?
                .iter()
                .filter(|e| e.is_owned_by(caller.member))
                .count();
            mine < poll.max_submissions_per_member as usize
        };
        let can_vote = eligible && voting_window_open(poll, now);

        Ok(PollSummary {
            id: poll.id,
            title: poll.title.clone(),
            description: poll.description.clone(),
            stage: poll.stage,
            method: poll.method,
            require_ranking: poll.require_ranking,
            submission_opens_at: poll.submission_opens_at,
            submission_closes_at: poll.submission_closes_at,
            voting_opens_at: poll.voting_opens_at,
            voting_closes_at: poll.voting_closes_at,
            max_selections: poll.max_selections,
            max_submissions_per_member: poll.max_submissions_per_member,
            can_submit,
            can_vote,
        })
    }

    /// Build the caller's view of every entry, ordered and filtered, plus
    /// the winner set if it is exposed to them.
    fn entry_views(
        &self,
        caller: Caller,
        poll: &Poll,
        cancel: &CancelToken,
    ) -> OpResult<(Vec<EntryView>, Vec<EntryId>)> {
        let entries = self.entries.entries_for_poll(poll.id, cancel)?;
        let ballots = self.ballots.ballots_for_poll(poll.id, cancel)?;

        let approval = tally_approval(&entries, &ballots);
        let histograms = rank_histograms(&entries, &ballots);
        let (winners, scores) = match poll.method {
            VotingMethod::Approval => (approval.winners.clone(), approval.counts.clone()),
            VotingMethod::Irv => {
                let irv = tally_irv(&entries, &ballots);
                (irv.winners, irv.scores)
            }
        };

        // One flag decides ranked-vs-shuffled, mirroring tally exposure.
        let ranked = caller.is_admin || poll.stage.is_closed();
        let mut ordered = entries;
        if ranked {
            ranked_sort(&mut ordered, &scores);
        } else {
            blind_shuffle(&mut ordered, poll.id, caller.member);
        }

        let mut names: HashMap<MemberId, Option<String>> = HashMap::new();
        let mut views = Vec::with_capacity(ordered.len());
        for (index, entry) in ordered.iter().enumerate() {
            let position = ranked.then_some(index as u32 + 1);
            let author_name = match names.get(&entry.owner) {
                Some(known) => known.clone(),
                None => {
                    let name = self
                        .roster
                        .profile(entry.owner, cancel)?
                        .map(|p| p.display_name);
                    names.insert(entry.owner, name.clone());
                    name
                }
            };
            views.push(entry_view(
                caller,
                poll,
                entry,
                &approval.counts,
                &histograms,
                &winners,
                position,
                author_name,
            ));
        }

        let exposed_winners = if caller.is_admin || poll.stage.is_closed() {
            winners
        } else {
            Vec::new()
        };
        Ok((views, exposed_winners))
    }

    /// View of a single entry, for operations returning one.
    fn single_entry_view(
        &self,
        caller: Caller,
        poll: &Poll,
        entry: Entry,
        cancel: &CancelToken,
    ) -> OpResult<EntryView> {
        let (views, _) = self.entry_views(caller, poll, cancel)?;
        views
            .into_iter()
            .find(|v| v.id == entry.id)
            .ok_or(OpError::NotFound)
    }

    fn checked_field(
        &self,
        name: &str,
        requirement: agora_types::FieldRequirement,
        value: Option<&str>,
    ) -> OpResult<String> {
        let value = value.map(str::trim).unwrap_or_default();
        if requirement.is_off() && !value.is_empty() {
            return Err(OpError::bad_request(format!(
                "this poll does not collect entry {name}s"
            )));
        }
        if requirement.is_required() && value.is_empty() {
            return Err(OpError::bad_request(format!("an entry {name} is required")));
        }
        Ok(value.to_owned())
    }
}

fn require_admin(caller: Caller) -> OpResult<()> {
    if caller.is_admin {
        Ok(())
    } else {
        Err(OpError::forbidden("administrator privileges required"))
    }
}

fn submission_window_open(poll: &Poll, now: Timestamp) -> bool {
    if !poll.stage.accepts_submissions() {
        return false;
    }
    if let Some(opens) = poll.submission_opens_at {
        if opens.is_future(now) {
            return false;
        }
    }
    if let Some(closes) = poll.submission_closes_at {
        if closes.is_reached(now) {
            return false;
        }
    }
    true
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

fn ballot_view(ballot: &Ballot) -> BallotView {
    BallotView {
        poll: ballot.poll,
        member: ballot.member,
        submitted_at: ballot.submitted_at,
        is_final: ballot.is_final,
        choices: ballot.choices.clone(),
    }
}

#[allow(clippy::too_many_arguments)]
fn entry_view(
    caller: Caller,
    poll: &Poll,
    entry: &Entry,
    approvals: &HashMap<EntryId, u64>,
    histograms: &HashMap<EntryId, std::collections::BTreeMap<u32, u64>>,
    winners: &[EntryId],
    position: Option<u32>,
    author_name: Option<String>,
) -> EntryView {
    let relation = Relation {
        is_admin: caller.is_admin,
        is_owner: entry.is_owned_by(caller.member),
    };
    let exposure = exposure(poll.stage, poll.title_field, relation);

    EntryView {
        id: entry.id,
        poll: entry.poll,
        title: if exposure.suppress_title {
            String::new()
        } else {
            entry.title.clone()
        },
        description: entry.description.clone(),
        author_name: if exposure.author { author_name } else { None },
        original_asset: exposure
            .assets
            .then(|| entry.original_asset.clone())
            .flatten(),
        public_asset: exposure.assets.then(|| entry.public_asset.clone()).flatten(),
        teaser_asset: entry.teaser_asset.clone(),
        approvals: if exposure.tallies {
            approvals.get(&entry.id).copied().unwrap_or(0)
        } else {
            0
        },
        rank_counts: if exposure.tallies {
            histograms.get(&entry.id).cloned().unwrap_or_default()
        } else {
            Default::default()
        },
        is_winner: exposure.tallies && winners.contains(&entry.id),
        position: if exposure.tallies { position } else { None },
        disqualified: entry.is_disqualified(),
        disqualify_reason: if caller.is_admin {
            entry.disqualified.as_ref().map(|d| d.reason.clone())
        } else {
            None
        },
        is_own: relation.is_owner,
    }
}
