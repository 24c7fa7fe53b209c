use super::*;

/// Tests updating an activity.
///
/// Verifies that every mutable field is rewritten in a single statement,
/// that the returned shape merges the identity and scope with the new
/// input, and that the new values are what a subsequent read observes.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip_entity = factory::create_trip(db).await?;
    let existing = factory::create_activity(db, trip_entity.id).await?;
    let trip = scope(trip_entity);

    let repo = ActivityRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            &trip,
            ActivityParam {
                activity_name: "Musee d'Orsay".to_string(),
                activity_address: "1 Rue de la Legion d'Honneur".to_string(),
                longitude: 2.3266,
                latitude: 48.8599,
                rating: 4.7,
                picture_url: "https://example.com/orsay.jpg".to_string(),
                hotel_distance: 2.4,
            },
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.activity_name, "Musee d'Orsay");
    assert_eq!(updated.longitude, 2.3266);
    assert_eq!(updated.rating, 4.7);
    assert_eq!(updated.trip_id, trip.id);

    // Verify the new values were persisted and the scope kept
    let db_activity = entity::prelude::Activity::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_activity.activity_name, "Musee d'Orsay");
    assert_eq!(db_activity.longitude, 2.3266);
    assert_eq!(db_activity.hotel_distance, 2.4);
    assert_eq!(db_activity.trip_id, trip.id);

    Ok(())
}

/// Tests updating an activity under the wrong trip.
///
/// Verifies scope enforcement on update: an activity owned by another trip
/// is reported as `NotFound` and its row is left untouched.
///
/// Expected: Err(DataError::NotFound), row unchanged
#[tokio::test]
async fn returns_not_found_under_wrong_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, activity) = factory::helpers::create_activity_with_trip(db).await?;
    let other_trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let result = repo
        .update(activity.id, &other_trip, louvre())
        .await;

    assert!(matches!(result, Err(DataError::NotFound)));

    // Verify the row was not touched
    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_activity.activity_name, activity.activity_name);
    assert_eq!(db_activity.trip_id, activity.trip_id);

    Ok(())
}

/// Tests updating an activity that does not exist.
///
/// Verifies that an update matching zero rows reports `NotFound` instead of
/// synthesizing a success from the input it was given.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let result = repo.update(999999, &trip, louvre()).await;

    assert!(matches!(result, Err(DataError::NotFound)));

    Ok(())
}
