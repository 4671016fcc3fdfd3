//! Settings data repository for database operations.
//!
//! A plain string key/value table used for bot state that has to survive restarts,
//! such as the ID of the join message.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for persisted settings.
pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    /// Creates a new SettingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a setting value by key.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Stored value
    /// - `Ok(None)` - No value stored under `key`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Creates or replaces a setting value.
    ///
    /// # Arguments
    /// - `key` - Setting key
    /// - `value` - Value to store, replacing any previous value
    ///
    /// # Returns
    /// - `Ok(())` - Value stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_column(entity::setting::Column::Value)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
