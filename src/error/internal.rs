use std::num::ParseIntError;
use thiserror::Error;

/// Violations of the bot's own data invariants.
///
/// These never come from user input; they mean persisted state was written by
/// something other than this bot or has been corrupted.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored Discord ID is not a valid snowflake.
    #[error("Stored value '{stored}' is not a Discord snowflake: {source}")]
    InvalidSnowflake {
        stored: String,
        #[source]
        source: ParseIntError,
    },
}
