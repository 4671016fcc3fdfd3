//! Points factory for creating leaderboard rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test score rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let row = PointsFactory::new(&db)
///     .user_id(123456789)
///     .score(7)
///     .build()
///     .await?;
/// ```
pub struct PointsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    score: i64,
}

impl<'a> PointsFactory<'a> {
    /// Creates a new PointsFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - score: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id(),
            score: 1,
        }
    }

    /// Sets the Discord user ID for the row.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the score for the row.
    pub fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::points::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::points::Model, DbErr> {
        entity::points::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
            score: ActiveValue::Set(self.score),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a score row for `user_id` with the given score.
///
/// Shorthand for `PointsFactory::new(db).user_id(user_id).score(score).build().await`.
pub async fn create_points(
    db: &DatabaseConnection,
    user_id: u64,
    score: i64,
) -> Result<entity::points::Model, DbErr> {
    PointsFactory::new(db)
        .user_id(user_id)
        .score(score)
        .build()
        .await
}
