use super::*;

/// Tests deleting an activity within its own trip.
///
/// Verifies that delete reports `true` and that a subsequent fetch under the
/// same scope yields `None`.
///
/// Expected: Ok(true), then Ok(None)
#[tokio::test]
async fn deletes_activity_then_get_returns_none() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let created = repo.create(&trip, louvre()).await?;

    let deleted = repo.delete(created.id, &trip).await?;

    assert!(deleted);
    assert!(repo.get_by_id(created.id, &trip).await?.is_none());

    Ok(())
}

/// Tests deleting an activity under the wrong trip.
///
/// Verifies scope enforcement on delete: an activity owned by another trip
/// is reported as `false` and its row survives.
///
/// Expected: Ok(false), row still present
#[tokio::test]
async fn returns_false_under_wrong_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, activity) = factory::helpers::create_activity_with_trip(db).await?;
    let other_trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let deleted = repo.delete(activity.id, &other_trip).await?;

    assert!(!deleted);

    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_some());

    Ok(())
}

/// Tests deleting one activity doesn't affect others on the same trip.
///
/// Expected: Ok with only target activity deleted
#[tokio::test]
async fn deletes_activity_without_affecting_others() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip_entity = factory::create_trip(db).await?;
    let activity1 = factory::create_activity(db, trip_entity.id).await?;
    let activity2 = factory::create_activity(db, trip_entity.id).await?;
    let trip = scope(trip_entity);

    let repo = ActivityRepository::new(db);
    assert!(repo.delete(activity1.id, &trip).await?);

    assert!(repo.get_by_id(activity1.id, &trip).await?.is_none());
    assert!(repo.get_by_id(activity2.id, &trip).await?.is_some());

    Ok(())
}

/// Tests deleting an activity that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let deleted = repo.delete(999999, &trip).await?;

    assert!(!deleted);

    Ok(())
}
