//! Drop lifecycle and claim arbitration.
//!
//! `DropService` owns the single active drop session. Opening a drop replaces the
//! session; claiming it flips the `claimed` flag and credits the winner while holding
//! the session lock, so concurrent reactions resolve to exactly one winner.

pub mod selector;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{
    data::points::PointsRepository,
    error::AppError,
    gateway::Gateway,
    model::drop::{ClaimAttempt, ClaimResult, DropOutcome, DropSession, RejectReason},
    service::drop::selector::DropSelector,
};

/// Service posting drops and arbitrating their claims.
///
/// Long-lived: one instance is created at startup and shared by the scheduler,
/// the reaction dispatcher and the `forcedrop` command.
pub struct DropService {
    selector: DropSelector,
    /// Discord channel ID drops are posted in
    channel_id: u64,
    /// Discord role ID pinged by every drop
    event_role_id: u64,
    session: Mutex<Option<DropSession>>,
}

impl DropService {
    /// Creates a new DropService with no active drop.
    ///
    /// # Arguments
    /// - `selector` - Validated drop selector
    /// - `channel_id` - Discord channel ID to post drops in
    /// - `event_role_id` - Discord role ID to ping with each drop
    pub fn new(selector: DropSelector, channel_id: u64, event_role_id: u64) -> Self {
        Self {
            selector,
            channel_id,
            event_role_id,
            session: Mutex::new(None),
        }
    }

    /// Selector used by [`Self::trigger`]; the help text lists its pool.
    pub fn selector(&self) -> &DropSelector {
        &self.selector
    }

    /// Picks a random outcome and opens a drop for it.
    ///
    /// # Arguments
    /// - `gateway` - Discord gateway used to post the announcement
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord message ID of the new drop
    /// - `Err(AppError)` - The announcement could not be posted
    pub async fn trigger(&self, gateway: &dyn Gateway) -> Result<u64, AppError> {
        let outcome = self.selector.pick(&mut rand::rng());

        self.open_drop(gateway, outcome).await
    }

    /// Posts a drop announcement and makes it the active session.
    ///
    /// The new session replaces any previous one, which implicitly closes it:
    /// reactions on the old message no longer match. The drop emoji is then
    /// pre-seeded on a best-effort basis; members can still react manually if
    /// seeding fails.
    ///
    /// # Arguments
    /// - `gateway` - Discord gateway used to post the announcement
    /// - `outcome` - Emoji and points offered by this drop
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord message ID of the new drop
    /// - `Err(AppError)` - Posting failed; the previous session is left untouched
    pub async fn open_drop(
        &self,
        gateway: &dyn Gateway,
        outcome: DropOutcome,
    ) -> Result<u64, AppError> {
        let content = drop_announcement(&outcome, self.event_role_id);
        let message_id = gateway
            .send_message(self.channel_id, &content, Some(self.event_role_id))
            .await?;

        *self.session.lock().await = Some(DropSession::open(self.channel_id, message_id, &outcome));

        tracing::info!(
            "Opened {}drop {} in channel {}: {} for {} point(s)",
            if outcome.is_super { "super " } else { "" },
            message_id,
            self.channel_id,
            outcome.emoji,
            outcome.points
        );

        if let Err(e) = gateway
            .seed_reaction(self.channel_id, message_id, &outcome.emoji)
            .await
        {
            tracing::warn!("Failed to seed reaction on drop {}: {}", message_id, e);
        }

        Ok(message_id)
    }

    /// Attempts to claim the active drop.
    ///
    /// Eligibility check, the claimed transition and the score write all happen
    /// under the session lock. When the score write fails the drop stays claimed
    /// and the error is returned; the winner must then be credited out of band.
    ///
    /// # Arguments
    /// - `db` - Database connection for crediting the winner
    /// - `attempt` - Reacting user, target message and emoji
    ///
    /// # Returns
    /// - `Ok(ClaimResult::Success)` - Attempt won and the points were stored
    /// - `Ok(ClaimResult::Rejected)` - No drop, stale message, wrong emoji or already claimed
    /// - `Err(AppError::DbErr)` - Drop was claimed but crediting the winner failed
    pub async fn try_claim(
        &self,
        db: &DatabaseConnection,
        attempt: &ClaimAttempt,
    ) -> Result<ClaimResult, AppError> {
        let mut session = self.session.lock().await;

        let Some(active) = session.as_mut() else {
            return Ok(ClaimResult::Rejected(RejectReason::NoActiveDrop));
        };

        if active.message_id != attempt.message_id {
            return Ok(ClaimResult::Rejected(RejectReason::StaleMessage));
        }

        if active.emoji != attempt.emoji {
            return Ok(ClaimResult::Rejected(RejectReason::WrongEmoji));
        }

        if active.claimed {
            return Ok(ClaimResult::Rejected(RejectReason::AlreadyClaimed));
        }

        active.claimed = true;

        if let Err(e) = PointsRepository::new(db)
            .add_points(attempt.user_id, active.points)
            .await
        {
            tracing::error!(
                "Drop {} claimed by user {} but crediting {} point(s) failed: {}",
                active.message_id,
                attempt.user_id,
                active.points,
                e
            );
            return Err(e.into());
        }

        tracing::info!(
            "User {} won drop {} for {} point(s)",
            attempt.user_id,
            active.message_id,
            active.points
        );

        Ok(ClaimResult::Success {
            points: active.points,
            is_super: active.is_super,
        })
    }

    /// Snapshot of the active session, if any.
    pub async fn active_session(&self) -> Option<DropSession> {
        self.session.lock().await.clone()
    }
}

/// Builds the drop announcement text.
fn drop_announcement(outcome: &DropOutcome, event_role_id: u64) -> String {
    let title = if outcome.is_super {
        "🌟 **SUPER DROP!**"
    } else {
        "☀️ **SUN UP DROP!**"
    };

    format!(
        "<@&{}>\n{}\nPrimeiro que reagir com {} ganha **{} ponto(s)**!",
        event_role_id, title, outcome.emoji, outcome.points
    )
}
