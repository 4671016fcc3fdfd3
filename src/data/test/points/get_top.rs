use super::*;

/// Tests leaderboard ordering.
///
/// Expected: entries sorted by descending score
#[tokio::test]
async fn orders_by_score_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_points(db, 1, 5).await?;
    factory::create_points(db, 2, 20).await?;
    factory::create_points(db, 3, 11).await?;

    let repo = PointsRepository::new(db);
    let top = repo.get_top(10).await?;

    let ids: Vec<u64> = top.iter().map(|entry| entry.user_id).collect();
    let scores: Vec<i64> = top.iter().map(|entry| entry.score).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(scores, vec![20, 11, 5]);

    Ok(())
}

/// Tests that the limit caps the number of entries.
///
/// Expected: at most `limit` entries, the highest ones
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for score in 1..=15 {
        factory::points::PointsFactory::new(db)
            .score(score)
            .build()
            .await?;
    }

    let repo = PointsRepository::new(db);
    let top = repo.get_top(10).await?;

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].score, 15);
    assert_eq!(top[9].score, 6);
    assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));

    Ok(())
}

/// Tests that ties are returned in a stable order.
///
/// Expected: equal scores ordered by user ID, identical across queries
#[tokio::test]
async fn breaks_ties_by_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_points(db, 30, 4).await?;
    factory::create_points(db, 10, 4).await?;
    factory::create_points(db, 20, 4).await?;

    let repo = PointsRepository::new(db);
    let first = repo.get_top(3).await?;
    let second = repo.get_top(3).await?;

    let ids: Vec<u64> = first.iter().map(|entry| entry.user_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
    assert_eq!(first, second);

    Ok(())
}

/// Tests the leaderboard of an empty table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_no_scores() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Points)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PointsRepository::new(db);

    assert!(repo.get_top(10).await?.is_empty());

    Ok(())
}
