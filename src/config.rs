use chrono::{FixedOffset, NaiveTime};
use std::num::NonZeroU64;

use crate::{
    error::{config::ConfigError, AppError},
    model::drop::{DropKind, SuperDrop},
    scheduler::window::{DropWindow, WaitRange},
    service::drop::selector::DropSelector,
};

/// Emoji members react with on the join message.
pub const JOIN_EMOJI: &str = "☀️";

const SUPER_DROP_EMOJI: &str = "🌟";

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;
const DEFAULT_WINDOW_START: &str = "19:00:00";
const DEFAULT_WINDOW_END: &str = "23:59:59";
const DEFAULT_MIN_WAIT_SECS: u64 = 600;
const DEFAULT_MAX_WAIT_SECS: u64 = 1800;
const DEFAULT_SUPER_DROP_CHANCE: f64 = 0.01;
const DEFAULT_SUPER_DROP_POINTS: i64 = 10;

/// Regular drop pool as (emoji, points, weight).
const REGULAR_POOL: [(&str, i64, u32); 3] = [("☀️", 1, 60), ("🌊", 2, 30), ("🍹", 3, 10)];

/// Discord snowflakes of the guild resources the bot works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordIds {
    pub guild_id: u64,
    pub drop_channel_id: u64,
    pub join_channel_id: u64,
    pub main_channel_id: u64,
    pub event_role_id: u64,
}

/// Drop timing and payout settings.
#[derive(Debug, Clone)]
pub struct DropConfig {
    /// Offset used to compute local time for the drop window
    pub utc_offset: FixedOffset,
    pub window: DropWindow,
    pub wait: WaitRange,
    pub selector: DropSelector,
}

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,
    pub command_prefix: String,
    pub ids: DiscordIds,
    pub drop: DropConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - Complete and validated configuration
    /// - `Err(AppError::ConfigErr)` - A required variable is missing, a value does not
    ///   parse or the drop settings are inconsistent
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` if unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let ids = DiscordIds {
            guild_id: env.required_id("GUILD_ID")?,
            drop_channel_id: env.required_id("DROP_CHANNEL_ID")?,
            join_channel_id: env.required_id("JOIN_CHANNEL_ID")?,
            main_channel_id: env.required_id("MAIN_CHANNEL_ID")?,
            event_role_id: env.required_id("EVENT_ROLE_ID")?,
        };

        let offset_hours: i32 =
            env.parsed_or("DROP_UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS)?;
        let utc_offset = if (-23..=23).contains(&offset_hours) {
            FixedOffset::east_opt(offset_hours * 3600)
        } else {
            None
        }
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "DROP_UTC_OFFSET_HOURS".to_string(),
            value: offset_hours.to_string(),
            reason: "offset must be within -23..=23 hours".to_string(),
        })?;

        let window = DropWindow::new(
            env.time_or("DROP_WINDOW_START", DEFAULT_WINDOW_START)?,
            env.time_or("DROP_WINDOW_END", DEFAULT_WINDOW_END)?,
        )?;

        let wait = WaitRange::new(
            env.parsed_or("DROP_MIN_WAIT_SECS", DEFAULT_MIN_WAIT_SECS)?,
            env.parsed_or("DROP_MAX_WAIT_SECS", DEFAULT_MAX_WAIT_SECS)?,
        )?;

        let selector = DropSelector::new(
            REGULAR_POOL
                .iter()
                .map(|&(emoji, points, weight)| DropKind::new(emoji, points, weight))
                .collect(),
            SuperDrop {
                chance: env.parsed_or("SUPER_DROP_CHANCE", DEFAULT_SUPER_DROP_CHANCE)?,
                emoji: SUPER_DROP_EMOJI.to_string(),
                points: env.parsed_or("SUPER_DROP_POINTS", DEFAULT_SUPER_DROP_POINTS)?,
            },
        )?;

        Ok(Self {
            discord_bot_token: env.required("DISCORD_TOKEN")?,
            database_url: env.required("DATABASE_URL")?,
            command_prefix: env
                .optional("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            ids,
            drop: DropConfig {
                utc_offset,
                window,
                wait,
                selector,
            },
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Blank values count as unset.
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    /// Discord snowflakes are never zero.
    fn required_id(&self, name: &str) -> Result<u64, ConfigError> {
        let value = self.required(name)?;
        let id: NonZeroU64 = parse_value(name, value)?;

        Ok(id.get())
    }

    fn parsed_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(value) => parse_value(name, value),
            None => Ok(default),
        }
    }

    fn time_or(&self, name: &str, default: &str) -> Result<NaiveTime, ConfigError> {
        let value = self.optional(name).unwrap_or_else(|| default.to_string());

        NaiveTime::parse_from_str(&value, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M"))
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })
    }
}

fn parse_value<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("GUILD_ID", "100"),
            ("DROP_CHANNEL_ID", "200"),
            ("JOIN_CHANNEL_ID", "300"),
            ("MAIN_CHANNEL_ID", "400"),
            ("EVENT_ROLE_ID", "500"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, AppError> {
        Config::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
    }

    fn config_error(result: Result<Config, AppError>) -> ConfigError {
        match result {
            Err(AppError::ConfigErr(e)) => e,
            Err(e) => panic!("expected config error, got {:?}", e),
            Ok(_) => panic!("expected config error, got Ok"),
        }
    }

    /// Tests loading with only the required variables.
    ///
    /// Expected: Ok with documented defaults applied
    #[test]
    fn applies_defaults() {
        let config = load(&required_vars()).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.command_prefix, "!");
        assert_eq!(
            config.ids,
            DiscordIds {
                guild_id: 100,
                drop_channel_id: 200,
                join_channel_id: 300,
                main_channel_id: 400,
                event_role_id: 500,
            }
        );
        assert_eq!(config.drop.utc_offset.local_minus_utc(), -3 * 3600);
        assert_eq!(
            config.drop.window.start(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap()
        );
        assert_eq!(
            config.drop.window.end(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
        assert_eq!(config.drop.wait.min().as_secs(), 600);
        assert_eq!(config.drop.wait.max().as_secs(), 1800);
        assert_eq!(config.drop.selector.super_drop().points, 10);
        assert_eq!(config.drop.selector.pool().len(), 3);
    }

    #[test]
    fn reads_overrides() {
        let mut vars = required_vars();
        vars.insert("COMMAND_PREFIX", "?");
        vars.insert("DROP_UTC_OFFSET_HOURS", "2");
        vars.insert("DROP_WINDOW_START", "18:30");
        vars.insert("DROP_MIN_WAIT_SECS", "60");
        vars.insert("DROP_MAX_WAIT_SECS", "120");
        vars.insert("SUPER_DROP_CHANCE", "0.5");
        vars.insert("SUPER_DROP_POINTS", "25");

        let config = load(&vars).unwrap();

        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.drop.utc_offset.local_minus_utc(), 2 * 3600);
        assert_eq!(
            config.drop.window.start(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(config.drop.wait.min().as_secs(), 60);
        assert_eq!(config.drop.selector.super_drop().chance, 0.5);
        assert_eq!(config.drop.selector.super_drop().points, 25);
    }

    /// Tests that each missing required variable is reported by name.
    ///
    /// Expected: Err(MissingEnvVar(name))
    #[test]
    fn reports_missing_variable() {
        for name in required_vars().keys() {
            let mut vars = required_vars();
            vars.remove(name);

            assert_eq!(
                config_error(load(&vars)),
                ConfigError::MissingEnvVar(name.to_string())
            );
        }
    }

    #[test]
    fn blank_required_variable_counts_as_missing() {
        let mut vars = required_vars();
        vars.insert("DISCORD_TOKEN", "  ");

        assert_eq!(
            config_error(load(&vars)),
            ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string())
        );
    }

    #[test]
    fn rejects_unparsable_id() {
        let mut vars = required_vars();
        vars.insert("GUILD_ID", "not-a-snowflake");

        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidEnvVar { name, .. } if name == "GUILD_ID"
        ));
    }

    /// Tests that a zero snowflake is refused at load time.
    ///
    /// Expected: Err(InvalidEnvVar) naming the zero variable
    #[test]
    fn rejects_zero_id() {
        for name in [
            "GUILD_ID",
            "DROP_CHANNEL_ID",
            "JOIN_CHANNEL_ID",
            "MAIN_CHANNEL_ID",
            "EVENT_ROLE_ID",
        ] {
            let mut vars = required_vars();
            vars.insert(name, "0");

            assert!(matches!(
                config_error(load(&vars)),
                ConfigError::InvalidEnvVar { name: invalid, value, .. }
                    if invalid == name && value == "0"
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let mut vars = required_vars();
        vars.insert("DROP_UTC_OFFSET_HOURS", "24");

        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidEnvVar { name, .. } if name == "DROP_UTC_OFFSET_HOURS"
        ));
    }

    /// Tests that a window wrapping past midnight is refused.
    ///
    /// Expected: Err(InvalidDropSettings)
    #[test]
    fn rejects_window_ending_before_start() {
        let mut vars = required_vars();
        vars.insert("DROP_WINDOW_START", "23:00:00");
        vars.insert("DROP_WINDOW_END", "01:00:00");

        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidDropSettings(_)
        ));
    }

    #[test]
    fn rejects_inverted_wait_range() {
        let mut vars = required_vars();
        vars.insert("DROP_MIN_WAIT_SECS", "1800");
        vars.insert("DROP_MAX_WAIT_SECS", "600");

        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidDropSettings(_)
        ));
    }

    #[test]
    fn rejects_invalid_super_drop() {
        let mut vars = required_vars();
        vars.insert("SUPER_DROP_CHANCE", "1.5");
        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidDropSettings(_)
        ));

        let mut vars = required_vars();
        vars.insert("SUPER_DROP_POINTS", "0");
        assert!(matches!(
            config_error(load(&vars)),
            ConfigError::InvalidDropSettings(_)
        ));
    }
}
