use thiserror::Error;

/// Startup configuration problems. Every variant aborts startup.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required variable such as `DISCORD_TOKEN` or `GUILD_ID` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Raw value as read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Drop settings parsed fine individually but are inconsistent together.
    #[error("Invalid drop settings: {0}")]
    InvalidDropSettings(String),
}
