use agora_eligibility::Eligibility;
use agora_types::EntryId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("not eligible to vote: {0}")]
    NotEligible(Eligibility),

    #[error("voting is not open for this poll")]
    VotingClosed,

    #[error("a ballot must select at least one entry")]
    NoChoices,

    #[error("at most {max} selections are allowed on one ballot")]
    TooManyChoices { max: u32 },

    #[error("entry {0} is selected more than once")]
    DuplicateChoice(EntryId),

    #[error("entry {0} does not belong to this poll")]
    UnknownEntry(EntryId),

    #[error("entry {0} has been disqualified")]
    DisqualifiedEntry(EntryId),

    #[error("ranked ballots must assign a rank to every choice (entry {0} has none)")]
    MissingRank(EntryId),

    #[error("approval ballots must not rank choices (entry {0} carries a rank)")]
    UnexpectedRank(EntryId),

    #[error("ranks must be unique within a ballot (rank {0} appears twice)")]
    DuplicateRank(u32),

    #[error("rank {rank} is out of range; ranks must cover 1..={count}")]
    RankOutOfRange { rank: u32, count: u32 },
}

impl VoteError {
    /// Whether this failure is a permission problem (Forbidden at the API
    /// boundary) rather than a malformed request (BadRequest).
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::NotEligible(_) | Self::VotingClosed)
    }
}
