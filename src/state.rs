//! Bot state shared by the event handler and the drop scheduler.
//!
//! Created once at startup and wrapped in an `Arc`. The drop session lives inside
//! `drops` and is the only mutable state; everything else is read-only after
//! construction apart from the bot user ID, which is recorded on the first ready
//! event.

use sea_orm::DatabaseConnection;
use std::sync::{Arc, OnceLock};

use crate::{
    config::{Config, JOIN_EMOJI},
    gateway::Gateway,
    service::{drop::DropService, participation::ParticipationGate, reaction::ReactionDispatcher},
};

pub struct BotState {
    /// Database connection pool for the score store and settings.
    pub db: DatabaseConnection,

    /// Discord API access used by every service.
    pub gateway: Arc<dyn Gateway>,

    pub config: Config,

    /// Owner of the active drop session.
    pub drops: DropService,

    pub gate: ParticipationGate,

    bot_user_id: OnceLock<u64>,
}

impl BotState {
    /// Creates the shared state from loaded configuration.
    ///
    /// # Arguments
    /// - `db` - Migrated database connection
    /// - `gateway` - Discord gateway implementation
    /// - `config` - Validated configuration
    pub fn new(db: DatabaseConnection, gateway: Arc<dyn Gateway>, config: Config) -> Self {
        let ids = config.ids;

        Self {
            db,
            gateway,
            drops: DropService::new(
                config.drop.selector.clone(),
                ids.drop_channel_id,
                ids.event_role_id,
            ),
            gate: ParticipationGate::new(
                ids.guild_id,
                ids.join_channel_id,
                ids.event_role_id,
                JOIN_EMOJI,
            ),
            config,
            bot_user_id: OnceLock::new(),
        }
    }

    /// Records the bot's own user ID. Later calls are ignored.
    pub fn set_bot_user_id(&self, user_id: u64) {
        if self.bot_user_id.set(user_id).is_err() {
            tracing::debug!("Bot user ID already recorded");
        }
    }

    pub fn bot_user_id(&self) -> Option<u64> {
        self.bot_user_id.get().copied()
    }

    /// Builds a reaction dispatcher over this state.
    pub fn dispatcher(&self) -> ReactionDispatcher<'_> {
        ReactionDispatcher::new(
            &self.db,
            self.gateway.as_ref(),
            &self.drops,
            &self.gate,
            self.config.ids.guild_id,
            self.bot_user_id(),
        )
    }
}
