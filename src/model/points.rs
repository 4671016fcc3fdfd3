//! Domain models for the score store.

use crate::{error::AppError, util::parse::parse_snowflake};

/// A participant's accumulated score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Discord user ID of the participant.
    pub user_id: u64,
    pub score: i64,
}

impl ScoreEntry {
    /// Converts an entity model to a score domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ScoreEntry)` - The converted score entry
    /// - `Err(AppError::InternalErr)` - Stored user ID is not a snowflake
    pub fn from_entity(entity: entity::points::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_snowflake(&entity.user_id)?,
            score: entity.score,
        })
    }
}
