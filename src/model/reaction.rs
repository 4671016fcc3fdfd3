//! Domain model for inbound reaction events.

/// Whether a reaction was added to or removed from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Added,
    Removed,
}

/// The guild member behind a reaction, when Discord supplied one.
///
/// Discord only attaches member data to reaction-add events in guilds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactingMember {
    pub display_name: String,
    /// Discord role IDs the member currently holds.
    pub role_ids: Vec<u64>,
}

/// Platform-neutral reaction event routed by the reaction dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEvent {
    pub kind: ReactionKind,
    /// `None` for reactions in direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    /// `None` when Discord omitted the reacting user.
    pub user_id: Option<u64>,
    pub emoji: String,
    pub member: Option<ReactingMember>,
}

impl ReactionEvent {
    /// Builds an event from a Serenity reaction payload.
    ///
    /// # Arguments
    /// - `kind` - Whether the reaction was added or removed
    /// - `reaction` - Raw reaction received from the gateway
    pub fn from_serenity(kind: ReactionKind, reaction: &serenity::all::Reaction) -> Self {
        Self {
            kind,
            guild_id: reaction.guild_id.map(|id| id.get()),
            channel_id: reaction.channel_id.get(),
            message_id: reaction.message_id.get(),
            user_id: reaction.user_id.map(|id| id.get()),
            emoji: reaction.emoji.to_string(),
            member: reaction.member.as_ref().map(|member| ReactingMember {
                display_name: member.display_name().to_string(),
                role_ids: member.roles.iter().map(|role| role.get()).collect(),
            }),
        }
    }
}
