//! Text replies for the public commands: ranking, personal score and help.

use chrono::{NaiveTime, Timelike};
use sea_orm::DatabaseConnection;
use serenity::all::MessageBuilder;

use crate::{
    data::points::PointsRepository, error::AppError, gateway::Gateway,
    scheduler::window::DropWindow, service::drop::selector::DropSelector,
};

/// Number of entries shown by the ranking command.
pub const RANK_LIMIT: u64 = 10;

/// Service rendering score replies.
pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new LeaderboardService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for reading scores
    /// - `gateway` - Discord gateway for resolving display names
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn Gateway) -> Self {
        Self { db, gateway }
    }

    /// Renders the top of the leaderboard.
    ///
    /// Names are resolved to guild display names; members who left the guild
    /// or whose lookup fails are shown as `User <id>`. Names are markdown
    /// escaped.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose members' names are looked up
    ///
    /// # Returns
    /// - `Ok(String)` - Message ready to send without mentions
    /// - `Err(AppError)` - Database error reading the leaderboard
    pub async fn ranking(&self, guild_id: u64) -> Result<String, AppError> {
        let top = PointsRepository::new(self.db).get_top(RANK_LIMIT).await?;

        let mut message = MessageBuilder::new();
        message.push("🏆 **RANKING SUN UP** 🏆");

        if top.is_empty() {
            message.push("\nNinguém pontuou ainda.");
        }

        for (position, entry) in top.iter().enumerate() {
            let name = match self
                .gateway
                .member_display_name(guild_id, entry.user_id)
                .await
            {
                Ok(Some(name)) => name,
                Ok(None) => format!("User {}", entry.user_id),
                Err(e) => {
                    tracing::warn!("Failed to resolve member {}: {}", entry.user_id, e);
                    format!("User {}", entry.user_id)
                }
            };

            message
                .push(format!("\n{}. ", position + 1))
                .push_safe(name)
                .push(format!(" — {}", entry.score));
        }

        Ok(message.build())
    }

    /// Renders a member's own score.
    pub async fn score(&self, user_id: u64) -> Result<String, AppError> {
        let score = PointsRepository::new(self.db).get_score(user_id).await?;

        Ok(format!("☀️ Você tem **{} ponto(s)**", score))
    }
}

/// Renders the help text from the configured drops and window.
///
/// # Arguments
/// - `selector` - Drop pool and super drop to list
/// - `window` - Daily drop window
/// - `prefix` - Command prefix shown in the command hints
pub fn help_message(selector: &DropSelector, window: &DropWindow, prefix: &str) -> String {
    let pool = selector
        .pool()
        .iter()
        .map(|kind| format!("{} {}", kind.emoji, points_label(kind.points)))
        .collect::<Vec<_>>()
        .join(" | ");

    let super_drop = selector.super_drop();

    format!(
        "☀️ **SUN UP — AJUDA** ☀️\n\n\
         • Reaja com ☀️ para participar do evento\n\
         • Drops entre **{} e {}**\n\
         • Primeiro a reagir ganha pontos\n\n\
         {}\n\
         {} SUPER DROP — {} ({}%)\n\n\
         `{prefix}rank` • `{prefix}meuspontos`",
        format_hour(window.start()),
        format_hour(window.end()),
        pool,
        super_drop.emoji,
        points_label(super_drop.points),
        super_drop.chance * 100.0,
        prefix = prefix,
    )
}

/// Formats a time of day the way the announcements do, e.g. `19h` or `23h59`.
pub fn format_hour(time: NaiveTime) -> String {
    match time.minute() {
        0 => format!("{}h", time.hour()),
        minute => format!("{}h{:02}", time.hour(), minute),
    }
}

fn points_label(points: i64) -> String {
    if points == 1 {
        "1 ponto".to_string()
    } else {
        format!("{} pontos", points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::points::create_points};

    use crate::{
        gateway::test::RecordingGateway,
        model::drop::{DropKind, SuperDrop},
    };

    const GUILD: u64 = 100;

    /// Tests rendering the ranking with resolved and unresolved members.
    ///
    /// Verifies ordering by score, display names with markdown escaped and the
    /// `User <id>` fallback for members not in the guild.
    ///
    /// Expected: Ok with one numbered line per entry
    #[tokio::test]
    async fn renders_ranking() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        create_points(db, 1, 5).await.unwrap();
        create_points(db, 2, 9).await.unwrap();
        create_points(db, 3, 1).await.unwrap();
        let gateway = RecordingGateway::new()
            .with_member(1, "Ana")
            .with_member(2, "*Bia*");

        let ranking = LeaderboardService::new(db, &gateway).ranking(GUILD).await?;

        assert_eq!(
            ranking,
            "🏆 **RANKING SUN UP** 🏆\n1. \\*Bia\\* — 9\n2. Ana — 5\n3. User 3 — 1"
        );

        Ok(())
    }

    #[tokio::test]
    async fn ranking_is_limited() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        for user_id in 1..=15 {
            create_points(db, user_id, user_id as i64).await.unwrap();
        }
        let gateway = RecordingGateway::new();

        let ranking = LeaderboardService::new(db, &gateway).ranking(GUILD).await?;

        assert_eq!(ranking.lines().count(), 1 + RANK_LIMIT as usize);
        assert!(ranking.contains("1. User 15 — 15"));
        assert!(!ranking.contains("User 5 "));

        Ok(())
    }

    #[tokio::test]
    async fn empty_ranking_says_so() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let gateway = RecordingGateway::new();

        let ranking = LeaderboardService::new(db, &gateway).ranking(GUILD).await?;

        assert!(ranking.ends_with("Ninguém pontuou ainda."));

        Ok(())
    }

    #[tokio::test]
    async fn renders_own_score() -> Result<(), AppError> {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        create_points(db, 42, 7).await.unwrap();
        let gateway = RecordingGateway::new();
        let service = LeaderboardService::new(db, &gateway);

        assert_eq!(service.score(42).await?, "☀️ Você tem **7 ponto(s)**");
        assert_eq!(service.score(43).await?, "☀️ Você tem **0 ponto(s)**");

        Ok(())
    }

    #[test]
    fn help_lists_drops_and_window() {
        let selector = DropSelector::new(
            vec![DropKind::new("☀️", 1, 60), DropKind::new("🌊", 2, 30)],
            SuperDrop {
                chance: 0.01,
                emoji: "🌟".to_string(),
                points: 10,
            },
        )
        .unwrap();
        let window = DropWindow::new(
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        )
        .unwrap();

        let help = help_message(&selector, &window, "!");

        assert!(help.contains("Drops entre **19h e 23h59**"));
        assert!(help.contains("☀️ 1 ponto | 🌊 2 pontos"));
        assert!(help.contains("🌟 SUPER DROP — 10 pontos (1%)"));
        assert!(help.ends_with("`!rank` • `!meuspontos`"));
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_hour(NaiveTime::from_hms_opt(19, 0, 0).unwrap()), "19h");
        assert_eq!(format_hour(NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "7h05");
    }
}
