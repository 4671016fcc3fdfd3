use super::*;

/// Tests reading the score of a participant who never won.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PointsRepository::new(db);

    assert_eq!(repo.get_score(999).await?, 0);

    Ok(())
}

/// Tests reading a stored score.
///
/// Expected: Ok(stored score)
#[tokio::test]
async fn returns_stored_score() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_points(db, 123, 42).await?;
    factory::create_points(db, 456, 7).await?;

    let repo = PointsRepository::new(db);

    assert_eq!(repo.get_score(123).await?, 42);
    assert_eq!(repo.get_score(456).await?, 7);

    Ok(())
}
