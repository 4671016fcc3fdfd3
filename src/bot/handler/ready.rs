//! Ready event handler for bot initialization.
//!
//! The ready event fires after the gateway handshake. It records the bot's own user
//! ID so its seed reactions can be told apart, makes sure the join message exists
//! and announces the bot in the main channel.

use serenity::all::{Context, Ready};

use crate::{service::leaderboard::format_hour, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Failures are logged; the bot keeps running without a join message or
/// announcement.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, _ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    state.set_bot_user_id(ready.user.id.get());

    if let Err(e) = state
        .gate
        .ensure_join_message(&state.db, state.gateway.as_ref())
        .await
    {
        tracing::error!("Failed to ensure join message: {}", e);
    }

    let window = state.config.drop.window;
    let announcement = format!(
        "✅ **SUN UP Bot online** — Drops ativos das **{} às {}**",
        format_hour(window.start()),
        format_hour(window.end())
    );

    if let Err(e) = state
        .gateway
        .send_message(state.config.ids.main_channel_id, &announcement, None)
        .await
    {
        tracing::warn!("Failed to post online announcement: {}", e);
    }
}
