//! Discord platform operations used by the drop and participation services.
//!
//! Services talk to Discord only through the [`Gateway`] trait so that drop
//! arbitration and role gating can be exercised without a live connection.
//! [`discord::DiscordGateway`] is the Serenity-backed implementation.

pub mod discord;


use serenity::async_trait;

use crate::error::AppError;

/// Outbound Discord API calls and lookups.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Sends a text message and returns the new message's ID.
    ///
    /// Mentions are suppressed except for `mention_role`, when provided.
    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        mention_role: Option<u64>,
    ) -> Result<u64, AppError>;

    /// Adds the bot's own reaction to a message so members can click it.
    async fn seed_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), AppError>;

    /// Adds `role_id` to a guild member. Granting a role already held is a no-op
    /// on Discord's side.
    async fn grant_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Removes `role_id` from a guild member.
    async fn revoke_role(&self, guild_id: u64, user_id: u64, role_id: u64)
        -> Result<(), AppError>;

    /// Resolves a member's display name, `None` if they are not in the guild.
    async fn member_display_name(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<String>, AppError>;

    /// Whether the bot can see the guild. A 404 is `Ok(false)`, other API
    /// failures are errors.
    async fn guild_exists(&self, guild_id: u64) -> Result<bool, AppError>;

    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError>;

    /// Whether the role exists in the guild's role list.
    async fn role_exists(&self, guild_id: u64, role_id: u64) -> Result<bool, AppError>;

    /// Whether the message is still present in the channel.
    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;
}
