//! Health report for the `diagnostics` admin command.

use sea_orm::DatabaseConnection;

use crate::{
    config::DiscordIds, error::AppError, gateway::Gateway,
    service::participation::ParticipationGate,
};

/// Result of one dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCheck {
    pub name: &'static str,
    pub ok: bool,
    /// Error text when the check itself failed rather than reporting a miss.
    pub detail: Option<String>,
}

impl DiagnosticCheck {
    fn from_result(name: &'static str, result: Result<bool, AppError>) -> Self {
        match result {
            Ok(ok) => Self {
                name,
                ok,
                detail: None,
            },
            Err(e) => Self {
                name,
                ok: false,
                detail: Some(e.to_string()),
            },
        }
    }
}

/// Service running the dependency checks behind the `diagnostics` command.
pub struct DiagnosticsService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn Gateway,
    gate: &'a ParticipationGate,
    ids: DiscordIds,
}

impl<'a> DiagnosticsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn Gateway,
        gate: &'a ParticipationGate,
        ids: DiscordIds,
    ) -> Self {
        Self {
            db,
            gateway,
            gate,
            ids,
        }
    }

    /// Checks every dependency the bot needs.
    ///
    /// Checks never short-circuit: a failing check is recorded and the next one
    /// still runs.
    pub async fn run(&self) -> Vec<DiagnosticCheck> {
        let ids = self.ids;

        vec![
            DiagnosticCheck::from_result(
                "database",
                self.db.ping().await.map(|_| true).map_err(AppError::from),
            ),
            DiagnosticCheck::from_result("guild", self.gateway.guild_exists(ids.guild_id).await),
            DiagnosticCheck::from_result(
                "drop channel",
                self.gateway.channel_exists(ids.drop_channel_id).await,
            ),
            DiagnosticCheck::from_result(
                "join channel",
                self.gateway.channel_exists(ids.join_channel_id).await,
            ),
            DiagnosticCheck::from_result(
                "main channel",
                self.gateway.channel_exists(ids.main_channel_id).await,
            ),
            DiagnosticCheck::from_result(
                "event role",
                self.gateway
                    .role_exists(ids.guild_id, ids.event_role_id)
                    .await,
            ),
            DiagnosticCheck::from_result("join message", self.join_message_exists().await),
        ]
    }

    async fn join_message_exists(&self) -> Result<bool, AppError> {
        let Some(message_id) = self.gate.join_message_id(self.db).await? else {
            return Ok(false);
        };

        self.gateway
            .message_exists(self.ids.join_channel_id, message_id)
            .await
    }
}

/// Renders check results, one line per dependency.
pub fn render_report(checks: &[DiagnosticCheck]) -> String {
    let mut lines = vec!["🩺 **SUN UP — DIAGNÓSTICO**".to_string()];

    for check in checks {
        let line = match (&check.ok, &check.detail) {
            (true, _) => format!("✅ {}: OK", check.name),
            (false, Some(detail)) => format!("❌ {}: NOT OK ({})", check.name, detail),
            (false, None) => format!("❌ {}: NOT OK", check.name),
        };
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::setting::create_setting};

    use crate::{gateway::test::RecordingGateway, service::participation::JOIN_MESSAGE_KEY};

    const IDS: DiscordIds = DiscordIds {
        guild_id: 100,
        drop_channel_id: 200,
        join_channel_id: 300,
        main_channel_id: 400,
        event_role_id: 500,
    };

    fn gate() -> ParticipationGate {
        ParticipationGate::new(IDS.guild_id, IDS.join_channel_id, IDS.event_role_id, "☀️")
    }

    /// Tests a healthy setup after the join message was posted.
    ///
    /// Expected: every check OK
    #[tokio::test]
    async fn all_checks_pass() {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let gateway = RecordingGateway::new();
        let gate = gate();
        gate.ensure_join_message(db, &gateway).await.unwrap();

        let checks = DiagnosticsService::new(db, &gateway, &gate, IDS).run().await;

        assert_eq!(checks.len(), 7);
        assert!(checks.iter().all(|check| check.ok), "{:?}", checks);
    }

    /// Tests that misses are reported per dependency without stopping the run.
    ///
    /// Expected: drop channel and join message NOT OK, the rest OK
    #[tokio::test]
    async fn reports_missing_resources() {
        let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        create_setting(db, JOIN_MESSAGE_KEY, "12345").await.unwrap();
        let mut gateway = RecordingGateway::new();
        gateway.missing_channels.insert(IDS.drop_channel_id);
        let gate = gate();

        let checks = DiagnosticsService::new(db, &gateway, &gate, IDS).run().await;

        let failed: Vec<_> = checks
            .iter()
            .filter(|check| !check.ok)
            .map(|check| check.name)
            .collect();
        assert_eq!(failed, vec!["drop channel", "join message"]);
    }

    #[test]
    fn renders_report_lines() {
        let report = render_report(&[
            DiagnosticCheck {
                name: "database",
                ok: true,
                detail: None,
            },
            DiagnosticCheck {
                name: "guild",
                ok: false,
                detail: Some("timeout".to_string()),
            },
            DiagnosticCheck {
                name: "event role",
                ok: false,
                detail: None,
            },
        ]);

        assert_eq!(
            report,
            "🩺 **SUN UP — DIAGNÓSTICO**\n✅ database: OK\n❌ guild: NOT OK (timeout)\n❌ event role: NOT OK"
        );
    }
}
