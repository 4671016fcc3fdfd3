use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a setting.
///
/// Expected: value readable after set
#[tokio::test]
async fn creates_new_setting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.set("join_message_id", "42").await?;

    assert_eq!(repo.get("join_message_id").await?, Some("42".to_string()));

    Ok(())
}

/// Tests overwriting an existing setting.
///
/// Expected: new value stored, still a single row
#[tokio::test]
async fn replaces_existing_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "join_message_id", "1").await?;

    let repo = SettingRepository::new(db);
    repo.set("join_message_id", "2").await?;

    assert_eq!(repo.get("join_message_id").await?, Some("2".to_string()));

    let count = entity::prelude::Setting::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
