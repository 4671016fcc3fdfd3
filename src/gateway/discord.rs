//! Serenity-backed implementation of the Discord gateway.

use serenity::{
    all::{
        ChannelId, CreateAllowedMentions, CreateMessage, GuildId, MessageId, ReactionType, RoleId,
        UserId,
    },
    async_trait,
    http::{Http, HttpError},
};
use std::sync::Arc;

use crate::{error::AppError, gateway::Gateway};

const ROLE_AUDIT_REASON: &str = "SUN UP participation";

/// Gateway performing Discord REST calls through a shared Serenity HTTP client.
#[derive(Clone)]
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    /// Creates a new DiscordGateway instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a Serenity error is Discord answering 404 for the requested resource.
fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

/// Maps a lookup result to `Ok(true)`, `Ok(false)` on 404, or the error.
fn exists<T>(result: Result<T, serenity::Error>) -> Result<bool, AppError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if is_not_found(&e) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Gateway for DiscordGateway {
    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        mention_role: Option<u64>,
    ) -> Result<u64, AppError> {
        let allowed_mentions = match mention_role {
            Some(role_id) => CreateAllowedMentions::new().roles(vec![RoleId::new(role_id)]),
            None => CreateAllowedMentions::new(),
        };

        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(allowed_mentions);

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(sent.id.get())
    }

    async fn seed_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &ReactionType::Unicode(emoji.to_string()),
            )
            .await?;

        Ok(())
    }

    async fn grant_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn revoke_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn member_display_name(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<String>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(member.display_name().to_string())),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn guild_exists(&self, guild_id: u64) -> Result<bool, AppError> {
        exists(self.http.get_guild(GuildId::new(guild_id)).await)
    }

    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError> {
        exists(self.http.get_channel(ChannelId::new(channel_id)).await)
    }

    async fn role_exists(&self, guild_id: u64, role_id: u64) -> Result<bool, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles.iter().any(|role| role.id.get() == role_id))
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        exists(
            self.http
                .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
                .await,
        )
    }
}
