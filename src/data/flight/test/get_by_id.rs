use super::*;

/// Tests fetching a flight within its own trip.
///
/// Verifies the create-then-get round trip under the same scope: the fetched
/// flight is structurally equal to the one returned by create.
///
/// Expected: Ok with equal flight
#[tokio::test]
async fn returns_flight_within_trip() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = FlightRepository::new(db);
    let created = repo
        .create(FlightParam {
            number: "DL0042".to_string(),
            departure_location: "New York".to_string(),
            arrival_location: "Lisbon".to_string(),
            departure_time: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            arrival_time: NaiveDate::from_ymd_opt(2025, 5, 21).unwrap(),
            trip_id: trip.id,
        })
        .await?;

    let fetched = repo.get_by_id(created.id, &trip).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests fetching a flight under the wrong trip.
///
/// Verifies scope enforcement: a flight ID that exists but belongs to
/// another trip is reported as `None`, indistinguishable from a missing ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_trips_flight() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, flight) = factory::helpers::create_flight_with_trip(db).await?;
    let other_trip = scope(factory::create_trip(db).await?);

    let repo = FlightRepository::new(db);
    let fetched = repo.get_by_id(flight.id, &other_trip).await?;

    assert!(fetched.is_none());

    Ok(())
}

/// Tests fetching a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = scope(factory::create_trip(db).await?);

    let repo = FlightRepository::new(db);
    let fetched = repo.get_by_id(999999, &trip).await?;

    assert!(fetched.is_none());

    Ok(())
}
