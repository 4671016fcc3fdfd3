use super::*;

/// Tests reading a missing setting.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);

    assert!(repo.get("join_message_id").await?.is_none());

    Ok(())
}

/// Tests reading a stored setting.
///
/// Expected: Ok(Some(value)) for the requested key only
#[tokio::test]
async fn returns_stored_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "join_message_id", "1402645989978013767").await?;
    factory::create_setting(db, "other", "x").await?;

    let repo = SettingRepository::new(db);

    assert_eq!(
        repo.get("join_message_id").await?,
        Some("1402645989978013767".to_string())
    );

    Ok(())
}
