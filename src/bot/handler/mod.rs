use serenity::all::{Context, EventHandler, Message, Reaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{model::reaction::ReactionKind, state::BotState};

pub mod message;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<BotState>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a reaction is added to any message the bot can see
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, ReactionKind::Added, add_reaction).await;
    }

    /// Called when a reaction is removed from any message the bot can see
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, ReactionKind::Removed, removed_reaction)
            .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(&self.state, ctx, new_message).await;
    }
}
