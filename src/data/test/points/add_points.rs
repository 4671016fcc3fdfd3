use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests awarding points to a participant with no row yet.
///
/// Verifies that the first award creates the row lazily with the awarded amount.
///
/// Expected: Ok(3) and one stored row
#[tokio::test]
async fn creates_row_on_first_award() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PointsRepository::new(db);
    let score = repo.add_points(111, 3).await?;

    assert_eq!(score, 3);

    let stored = entity::prelude::Points::find_by_id("111".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.score, 3);

    Ok(())
}

/// Tests that repeated awards accumulate.
///
/// Expected: add_points(u, a); add_points(u, b) leaves score a + b in a single row
#[tokio::test]
async fn accumulates_for_same_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PointsRepository::new(db);
    repo.add_points(222, 2).await?;
    let score = repo.add_points(222, 10).await?;

    assert_eq!(score, 12);
    assert_eq!(repo.get_score(222).await?, 12);

    let count = entity::prelude::Points::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that awards to different participants do not interfere.
///
/// Expected: each participant holds only their own points
#[tokio::test]
async fn keeps_participants_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_points(db, 333, 5).await?;

    let repo = PointsRepository::new(db);
    let (first, second) = tokio::join!(repo.add_points(333, 1), repo.add_points(444, 3));
    first?;
    second?;

    assert_eq!(repo.get_score(333).await?, 6);
    assert_eq!(repo.get_score(444).await?, 3);

    Ok(())
}

/// Tests that a negative delta is applied as-is.
///
/// Expected: score decreases by the delta
#[tokio::test]
async fn applies_negative_delta() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_points(db, 555, 10).await?;

    let repo = PointsRepository::new(db);
    let score = repo.add_points(555, -4).await?;

    assert_eq!(score, 6);

    Ok(())
}
