use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Reads a Discord snowflake stored as text back into a `u64`.
///
/// Snowflakes are persisted as strings; zero is never a valid snowflake and is
/// rejected along with anything non-numeric.
///
/// # Arguments
/// - `stored` - Text as read from the database
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(AppError::InternalErr(InvalidSnowflake))` - Stored text is not a snowflake
pub fn parse_snowflake(stored: &str) -> Result<u64, AppError> {
    let id = stored
        .parse::<NonZeroU64>()
        .map_err(|source| InternalError::InvalidSnowflake {
            stored: stored.to_string(),
            source,
        })?;

    Ok(id.get())
}
