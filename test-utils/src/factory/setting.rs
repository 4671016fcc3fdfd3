//! Setting factory for creating key/value rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a setting row.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Setting key
/// - `value` - Setting value
///
/// # Returns
/// - `Ok(entity::setting::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate key)
pub async fn create_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::setting::Model, DbErr> {
    entity::setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
    }
    .insert(db)
    .await
}
