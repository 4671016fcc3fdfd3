//! Points data repository for database operations.
//!
//! This module provides the `PointsRepository` backing the leaderboard. Scores are only
//! ever changed through an additive upsert, so concurrent awards to the same member
//! accumulate instead of overwriting each other.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::points::ScoreEntry};

/// Repository providing database operations for participant scores.
pub struct PointsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointsRepository<'a> {
    /// Creates a new PointsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PointsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds points to a participant's score.
    ///
    /// Inserts a row with `delta` as the score if the participant has none yet,
    /// otherwise adds `delta` to the stored score in the same statement.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the participant
    /// - `delta` - Points to add (may be negative, though drops only award positive values)
    ///
    /// # Returns
    /// - `Ok(i64)` - The participant's score after the update
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn add_points(&self, user_id: u64, delta: i64) -> Result<i64, DbErr> {
        let entity = entity::prelude::Points::insert(entity::points::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            score: ActiveValue::Set(delta),
        })
        .on_conflict(
            OnConflict::column(entity::points::Column::UserId)
                .value(
                    entity::points::Column::Score,
                    Expr::cust("score + excluded.score"),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity.score)
    }

    /// Gets a participant's score.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the participant
    ///
    /// # Returns
    /// - `Ok(i64)` - Stored score, or 0 if the participant has never won a drop
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_score(&self, user_id: u64) -> Result<i64, DbErr> {
        let entity = entity::prelude::Points::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|points| points.score).unwrap_or(0))
    }

    /// Gets the highest scores.
    ///
    /// Ordered by score descending; equal scores are ordered by user ID so the
    /// result is stable.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<ScoreEntry>)` - At most `limit` entries, best first
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored user ID is not a snowflake
    pub async fn get_top(&self, limit: u64) -> Result<Vec<ScoreEntry>, AppError> {
        let entities = entity::prelude::Points::find()
            .order_by_desc(entity::points::Column::Score)
            .order_by_asc(entity::points::Column::UserId)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(ScoreEntry::from_entity).collect()
    }
}
