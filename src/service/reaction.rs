//! Routing of reaction events to the participation gate or the claim arbiter.

use sea_orm::DatabaseConnection;
use serenity::all::MessageBuilder;

use crate::{
    error::AppError,
    gateway::Gateway,
    model::{
        drop::{ClaimAttempt, ClaimResult, RejectReason},
        reaction::{ReactionEvent, ReactionKind},
    },
    service::{
        drop::DropService,
        participation::{GateOutcome, ParticipationGate},
    },
};

/// Where a reaction event ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Event was outside the configured guild, had no user or is a removal on a
    /// non-join message.
    Ignored,
    Join(GateOutcome),
    Claim(ClaimResult),
}

/// Dispatches one reaction event.
///
/// Built per event from the shared bot state.
pub struct ReactionDispatcher<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
    drops: &'a DropService,
    gate: &'a ParticipationGate,
    guild_id: u64,
    /// `None` until the ready event has been received.
    bot_user_id: Option<u64>,
}

impl<'a> ReactionDispatcher<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn Gateway,
        drops: &'a DropService,
        gate: &'a ParticipationGate,
        guild_id: u64,
        bot_user_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            gateway,
            drops,
            gate,
            guild_id,
            bot_user_id,
        }
    }

    /// Routes a reaction to the join gate or the drop arbiter.
    ///
    /// Reactions on the stored join message go to the gate; every other reaction
    /// added in the guild is a claim attempt. A winning claim is announced in the
    /// channel the drop was posted in.
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome)` - What happened to the event
    /// - `Err(AppError)` - Crediting a winner failed
    pub async fn dispatch(&self, event: &ReactionEvent) -> Result<DispatchOutcome, AppError> {
        if event.guild_id != Some(self.guild_id) {
            return Ok(DispatchOutcome::Ignored);
        }

        let Some(user_id) = event.user_id else {
            return Ok(DispatchOutcome::Ignored);
        };
        let from_bot = self.bot_user_id == Some(user_id);

        // A broken join message lookup must not block drop claims
        let join_message_id = match self.gate.join_message_id(self.db).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to read join message ID: {}", e);
                None
            }
        };

        if join_message_id == Some(event.message_id) {
            if from_bot {
                return Ok(DispatchOutcome::Ignored);
            }

            let outcome = self.gate.handle_reaction(self.gateway, event, user_id).await;
            return Ok(DispatchOutcome::Join(outcome));
        }

        if event.kind == ReactionKind::Removed {
            return Ok(DispatchOutcome::Ignored);
        }

        if from_bot {
            return Ok(DispatchOutcome::Claim(ClaimResult::Rejected(
                RejectReason::BotReaction,
            )));
        }

        let Some(member) = event.member.as_ref() else {
            tracing::debug!("Reaction by {} has no member data, ignoring", user_id);
            return Ok(DispatchOutcome::Claim(ClaimResult::Rejected(
                RejectReason::UnknownMember,
            )));
        };

        let attempt = ClaimAttempt {
            user_id,
            message_id: event.message_id,
            emoji: event.emoji.clone(),
        };
        let result = self.drops.try_claim(self.db, &attempt).await?;

        match &result {
            ClaimResult::Success { points, .. } => {
                let announcement = MessageBuilder::new()
                    .push("🎉 ")
                    .push_safe(member.display_name.as_str())
                    .push(format!(" ganhou **{} ponto(s)**!", points))
                    .build();

                if let Err(e) = self
                    .gateway
                    .send_message(event.channel_id, &announcement, None)
                    .await
                {
                    tracing::warn!("Failed to announce drop winner {}: {}", user_id, e);
                }
            }
            ClaimResult::Rejected(reason) => {
                tracing::debug!(
                    "Claim by {} on message {} rejected: {:?}",
                    user_id,
                    event.message_id,
                    reason
                );
            }
        }

        Ok(DispatchOutcome::Claim(result))
    }
}
