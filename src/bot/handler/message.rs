use serenity::all::{Context, Message};

use crate::{
    bot::command::Command,
    error::AppError,
    service::{
        diagnostics::{render_report, DiagnosticsService},
        leaderboard::{help_message, LeaderboardService},
    },
    state::BotState,
};

/// Handle message creation in a channel
///
/// Only prefix commands from members of the configured guild are handled. Replies
/// are sent without pinging anyone.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Commands are only served in the configured guild, not in DMs
    if message.guild_id.map(|id| id.get()) != Some(state.config.ids.guild_id) {
        return;
    }

    let Some(command) = Command::parse(&message.content, &state.config.command_prefix) else {
        return;
    };

    let author_id = message.author.id.get();
    tracing::debug!("User {} invoked {:?}", author_id, command);

    let reply = if command.requires_admin() && !is_admin(&ctx, &message) {
        tracing::info!("User {} denied admin command {:?}", author_id, command);
        "⛔ Apenas administradores podem usar este comando.".to_string()
    } else {
        match run_command(state, command, author_id).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Failed to run command {:?}: {}", command, e);
                "⚠️ Não foi possível executar o comando.".to_string()
            }
        }
    };

    if let Err(e) = state
        .gateway
        .send_message(message.channel_id.get(), &reply, None)
        .await
    {
        tracing::error!("Failed to reply to command {:?}: {}", command, e);
    }
}

/// Whether the message author has the Administrator permission in the guild.
///
/// Resolved from the cache; an uncached guild counts as not an administrator.
fn is_admin(ctx: &Context, message: &Message) -> bool {
    message
        .author_permissions(ctx)
        .is_some_and(|permissions| permissions.administrator())
}

/// Runs a command and renders its reply.
async fn run_command(
    state: &BotState,
    command: Command,
    author_id: u64,
) -> Result<String, AppError> {
    let gateway = state.gateway.as_ref();

    match command {
        Command::Rank => {
            LeaderboardService::new(&state.db, gateway)
                .ranking(state.config.ids.guild_id)
                .await
        }
        Command::MyScore => {
            LeaderboardService::new(&state.db, gateway)
                .score(author_id)
                .await
        }
        Command::Help => Ok(help_message(
            state.drops.selector(),
            &state.config.drop.window,
            &state.config.command_prefix,
        )),
        Command::ForceDrop => {
            let message_id = state.drops.trigger(gateway).await?;
            tracing::info!("User {} forced drop {}", author_id, message_id);

            Ok("✅ Drop enviado.".to_string())
        }
        Command::SetupJoinMessage => {
            let message_id = state.gate.post_join_message(&state.db, gateway).await?;
            tracing::info!("User {} reposted join message {}", author_id, message_id);

            Ok("✅ Mensagem de participação criada.".to_string())
        }
        Command::Diagnostics => {
            let checks = DiagnosticsService::new(&state.db, gateway, &state.gate, state.config.ids)
                .run()
                .await;

            Ok(render_report(&checks))
        }
    }
}
