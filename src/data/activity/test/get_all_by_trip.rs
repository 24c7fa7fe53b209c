use super::*;

/// Tests that activities are sorted by name.
///
/// After inserting "Louvre" and "Eiffel Tower" for one trip, listing returns
/// them ordered `["Eiffel Tower", "Louvre"]`.
///
/// Expected: Ok with alphabetical ordering
#[tokio::test]
async fn sorts_by_activity_name() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip_entity = factory::create_trip(db).await?;
    factory::activity::ActivityFactory::new(db, trip_entity.id)
        .activity_name("Louvre")
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db, trip_entity.id)
        .activity_name("Eiffel Tower")
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let activities = repo.get_all_by_trip(&scope(trip_entity)).await?;

    let names: Vec<&str> = activities.iter().map(|a| a.activity_name.as_str()).collect();
    assert_eq!(names, vec!["Eiffel Tower", "Louvre"]);

    Ok(())
}

/// Tests that listing is scoped to the given trip.
///
/// Verifies that activities planned under another trip never appear in the
/// result.
///
/// Expected: Ok with only the trip's own activities
#[tokio::test]
async fn returns_only_activities_for_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip1 = factory::create_trip(db).await?;
    let trip2 = factory::create_trip(db).await?;

    let own = factory::create_activity(db, trip1.id).await?;
    factory::create_activity(db, trip2.id).await?;
    factory::create_activity(db, trip2.id).await?;

    let repo = ActivityRepository::new(db);
    let activities = repo.get_all_by_trip(&scope(trip1)).await?;

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].id, own.id);

    Ok(())
}

/// Tests listing activities for a trip with none planned.
///
/// Verifies that the repository returns an empty vector, not an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_trip_without_activities() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = ActivityRepository::new(db);
    let activities = repo.get_all_by_trip(&trip).await?;

    assert!(activities.is_empty());

    Ok(())
}
