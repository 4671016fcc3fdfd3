//! Event role gating through reactions on the join message.

use sea_orm::DatabaseConnection;

use crate::{
    data::setting::SettingRepository,
    error::AppError,
    gateway::Gateway,
    model::reaction::{ReactionEvent, ReactionKind},
    util::parse::parse_snowflake,
};

/// Settings key under which the join message ID is stored.
pub const JOIN_MESSAGE_KEY: &str = "join_message_id";

/// What the gate did with a reaction on the join message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Reaction used another emoji.
    Ignored,
    Granted,
    /// Member already held the event role; no API call was made.
    AlreadyHeld,
    Revoked,
    /// The role change was attempted and failed; already logged.
    Failed,
}

/// Grants and revokes the event role for members reacting to the join message.
pub struct ParticipationGate {
    guild_id: u64,
    join_channel_id: u64,
    event_role_id: u64,
    join_emoji: String,
}

impl ParticipationGate {
    /// Creates a gate for one guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the role lives in
    /// - `join_channel_id` - Discord channel ID the join message is posted in
    /// - `event_role_id` - Discord role ID granted to participants
    /// - `join_emoji` - Emoji members react with to join
    pub fn new(
        guild_id: u64,
        join_channel_id: u64,
        event_role_id: u64,
        join_emoji: impl Into<String>,
    ) -> Self {
        Self {
            guild_id,
            join_channel_id,
            event_role_id,
            join_emoji: join_emoji.into(),
        }
    }

    /// Gets the stored join message ID.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - ID of the persisted join message
    /// - `Ok(None)` - No join message has been posted yet
    /// - `Err(AppError)` - Database error or a corrupt stored value
    pub async fn join_message_id(&self, db: &DatabaseConnection) -> Result<Option<u64>, AppError> {
        SettingRepository::new(db)
            .get(JOIN_MESSAGE_KEY)
            .await?
            .map(|stored| parse_snowflake(&stored))
            .transpose()
    }

    /// Posts the join message unless one is already stored.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the existing or newly posted join message
    /// - `Err(AppError)` - Database error or posting failed
    pub async fn ensure_join_message(
        &self,
        db: &DatabaseConnection,
        gateway: &dyn Gateway,
    ) -> Result<u64, AppError> {
        if let Some(message_id) = self.join_message_id(db).await? {
            tracing::debug!("Join message {} already exists", message_id);
            return Ok(message_id);
        }

        self.post_join_message(db, gateway).await
    }

    /// Posts a fresh join message and replaces the stored ID.
    ///
    /// Reactions on an older join message stop granting the role once the
    /// new ID is stored.
    pub async fn post_join_message(
        &self,
        db: &DatabaseConnection,
        gateway: &dyn Gateway,
    ) -> Result<u64, AppError> {
        let content = format!(
            "☀️ **SUN UP — PARTICIPAÇÃO**\nReaja com {} para participar do evento e receber o cargo **☀️ SUN**.",
            self.join_emoji
        );

        let message_id = gateway
            .send_message(self.join_channel_id, &content, None)
            .await?;

        if let Err(e) = gateway
            .seed_reaction(self.join_channel_id, message_id, &self.join_emoji)
            .await
        {
            tracing::warn!("Failed to seed join reaction on {}: {}", message_id, e);
        }

        SettingRepository::new(db)
            .set(JOIN_MESSAGE_KEY, &message_id.to_string())
            .await?;

        tracing::info!(
            "Posted join message {} in channel {}",
            message_id,
            self.join_channel_id
        );

        Ok(message_id)
    }

    /// Applies a reaction on the join message to the reacting member's roles.
    ///
    /// The caller has already matched the event to the join message. Role API
    /// failures are logged and reported as `Failed`, never returned as errors.
    ///
    /// # Arguments
    /// - `gateway` - Discord gateway used to change roles
    /// - `event` - Reaction on the join message
    /// - `user_id` - Discord user ID of the reacting member
    pub async fn handle_reaction(
        &self,
        gateway: &dyn Gateway,
        event: &ReactionEvent,
        user_id: u64,
    ) -> GateOutcome {
        if event.emoji != self.join_emoji {
            return GateOutcome::Ignored;
        }

        match event.kind {
            ReactionKind::Added => {
                let already_held = event
                    .member
                    .as_ref()
                    .is_some_and(|member| member.role_ids.contains(&self.event_role_id));
                if already_held {
                    return GateOutcome::AlreadyHeld;
                }

                match gateway
                    .grant_role(self.guild_id, user_id, self.event_role_id)
                    .await
                {
                    Ok(()) => {
                        tracing::info!("Granted event role to user {}", user_id);
                        GateOutcome::Granted
                    }
                    Err(e) => {
                        tracing::error!("Failed to grant event role to user {}: {}", user_id, e);
                        GateOutcome::Failed
                    }
                }
            }
            ReactionKind::Removed => {
                match gateway
                    .revoke_role(self.guild_id, user_id, self.event_role_id)
                    .await
                {
                    Ok(()) => {
                        tracing::info!("Revoked event role from user {}", user_id);
                        GateOutcome::Revoked
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to revoke event role from user {}: {}",
                            user_id,
                            e
                        );
                        GateOutcome::Failed
                    }
                }
            }
        }
    }
}
