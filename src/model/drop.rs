//! Domain models for drop events and claim arbitration.

/// One entry of the regular drop pool.
#[derive(Debug, Clone, PartialEq)]
pub struct DropKind {
    /// Unicode emoji participants must react with.
    pub emoji: String,
    /// Points awarded to the winner.
    pub points: i64,
    /// Relative selection weight; weights are normalized, they need not sum to 100.
    pub weight: u32,
}

impl DropKind {
    pub fn new(emoji: impl Into<String>, points: i64, weight: u32) -> Self {
        Self {
            emoji: emoji.into(),
            points,
            weight,
        }
    }
}

/// The rare high-value drop, rolled independently before the regular pool.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperDrop {
    /// Probability in `[0, 1]` that a drop is a super drop.
    pub chance: f64,
    pub emoji: String,
    pub points: i64,
}

/// Result of a single selector draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    pub emoji: String,
    pub points: i64,
    pub is_super: bool,
}

/// State of the currently open drop.
///
/// Only ever accessed through the drop service's session lock. `claimed` flips
/// from `false` to `true` exactly once; the session is never reopened, only
/// replaced by the next drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DropSession {
    /// Discord message ID of the drop announcement.
    pub message_id: u64,
    /// Discord channel ID the announcement was posted in.
    pub channel_id: u64,
    pub emoji: String,
    pub points: i64,
    pub is_super: bool,
    pub claimed: bool,
}

impl DropSession {
    /// Opens a fresh, unclaimed session for a posted drop message.
    pub fn open(channel_id: u64, message_id: u64, outcome: &DropOutcome) -> Self {
        Self {
            message_id,
            channel_id,
            emoji: outcome.emoji.clone(),
            points: outcome.points,
            is_super: outcome.is_super,
            claimed: false,
        }
    }
}

/// A reaction that may win the open drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimAttempt {
    /// Discord user ID of the reacting member.
    pub user_id: u64,
    /// Discord message ID the reaction was added to.
    pub message_id: u64,
    /// Reaction emoji as rendered by Discord.
    pub emoji: String,
}

/// Why a claim attempt did not win.
///
/// Rejections are expected under concurrency and are never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No drop has been posted since startup.
    NoActiveDrop,
    /// Reaction targets a message other than the active drop.
    StaleMessage,
    /// Reaction uses a different emoji than the drop asks for.
    WrongEmoji,
    /// Another member already won this drop.
    AlreadyClaimed,
    /// The bot's own seed reaction.
    BotReaction,
    /// The reacting user could not be resolved to a guild member.
    UnknownMember,
}

/// Outcome of [`crate::service::drop::DropService::try_claim`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimResult {
    /// The attempt won the drop and `points` were credited.
    Success { points: i64, is_super: bool },
    Rejected(RejectReason),
}

impl ClaimResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
