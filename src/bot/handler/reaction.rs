use serenity::all::{Context, Reaction};

use crate::{
    model::reaction::{ReactionEvent, ReactionKind},
    state::BotState,
};

/// Handles a reaction being added or removed.
///
/// Normalizes the Serenity payload and hands it to the reaction dispatcher.
/// Errors are logged and the event is dropped.
pub async fn handle_reaction(state: &BotState, _ctx: Context, kind: ReactionKind, reaction: Reaction) {
    let event = ReactionEvent::from_serenity(kind, &reaction);

    match state.dispatcher().dispatch(&event).await {
        Ok(outcome) => tracing::trace!(
            "Reaction {:?} on message {}: {:?}",
            kind,
            event.message_id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to handle reaction on message {}: {}",
            event.message_id,
            e
        ),
    }
}
