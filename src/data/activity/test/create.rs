use super::*;

/// Tests creating a new activity.
///
/// Verifies that the repository creates an activity record binding every
/// input field plus the trip reference derived from the scope, and returns
/// the store-assigned identity together with the fields that were written.
///
/// Expected: Ok with activity created
#[tokio::test]
async fn creates_activity_for_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let result = repo.create(&trip, louvre()).await;

    assert!(result.is_ok());
    let activity = result.unwrap();
    assert!(activity.id > 0);
    assert_eq!(activity.activity_name, "Louvre");
    assert_eq!(activity.activity_address, "Rue de Rivoli");
    assert_eq!(activity.rating, 4.8);
    assert_eq!(activity.trip_id, trip.id);

    // Verify the row exists in the database scoped to the trip
    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_some());
    assert_eq!(db_activity.unwrap().trip_id, trip.id);

    Ok(())
}

/// Tests that coordinates survive creation unchanged.
///
/// Verifies that floating-point longitude, latitude, rating, and distance
/// read back from the store bit-exactly.
///
/// Expected: Ok with floats preserved
#[tokio::test]
async fn preserves_coordinate_precision() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let created = repo
        .create(
            &trip,
            ActivityParam {
                activity_name: "Observatory".to_string(),
                activity_address: "1 Hill Rd".to_string(),
                longitude: -122.41941550482511,
                latitude: 37.77492950545422,
                rating: 4.3,
                picture_url: "https://example.com/observatory.jpg".to_string(),
                hotel_distance: 0.07,
            },
        )
        .await?;

    let db_activity = entity::prelude::Activity::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_activity.longitude, -122.41941550482511);
    assert_eq!(db_activity.latitude, 37.77492950545422);
    assert_eq!(db_activity.rating, 4.3);
    assert_eq!(db_activity.hotel_distance, 0.07);

    Ok(())
}

/// Tests creating activities under two different trips.
///
/// Verifies that the trip reference comes from the scope argument and that
/// activities of different trips stay independent.
///
/// Expected: Ok with correct trip references
#[tokio::test]
async fn binds_activity_to_scope_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip1 = scope(factory::create_trip(db).await?);
    let trip2 = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let first = repo.create(&trip1, louvre()).await?;
    let second = repo.create(&trip2, louvre()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.trip_id, trip1.id);
    assert_eq!(second.trip_id, trip2.id);

    Ok(())
}
