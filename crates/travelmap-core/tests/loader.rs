use std::fs;

use tempfile::tempdir;
use travelmap_core::{load_from_path, load_or_seed, DataSource, TravelData, TravelError};

#[test]
fn missing_file_is_seeded_and_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("travel_data.json");

    let outcome = load_or_seed(&path);

    assert!(outcome.was_seeded());
    assert!(matches!(
        outcome.source,
        DataSource::Seeded { persisted: true, .. }
    ));
    assert_eq!(outcome.data, TravelData::defaults());

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, TravelData::defaults().to_json_pretty().unwrap());
}

#[test]
fn seeded_file_is_loaded_on_next_start() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("travel_data.json");

    assert!(load_or_seed(&path).was_seeded());
    let second = load_or_seed(&path);

    assert_eq!(second.source, DataSource::Loaded(path.clone()));
    assert_eq!(second.data, TravelData::defaults());
}

#[test]
fn existing_file_is_used_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trip.json");
    fs::write(
        &path,
        r#"{
  "locations": [
    {"id": 42, "name": "Harbour", "lat": 1.25, "lng": 2.5, "description": "d",
     "photos": [{"thumbnail": "t.jpg", "caption": "only"}], "day": 2}
  ],
  "routes": [
    {"points": [{"lat": 1.0, "lng": 2.0, "routez": 9}], "color": "red", "name": "r", "day": 1}
  ],
  "totalDays": 2
}"#,
    )
    .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let outcome = load_or_seed(&path);

    assert!(!outcome.was_seeded());
    assert_eq!(outcome.data.total_days, 2);
    assert_eq!(outcome.data.locations[0].id, 42);
    assert_eq!(outcome.data.locations[0].photos[0].full, "");
    assert_eq!(outcome.data.locations[0].photos[0].display_url(), "t.jpg");
    // Loading never rewrites a valid file.
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn corrupt_file_is_replaced_by_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("travel_data.json");
    fs::write(&path, "{ not json").unwrap();

    let outcome = load_or_seed(&path);

    match &outcome.source {
        DataSource::Seeded { reason, persisted } => {
            assert!(reason.contains("JSON"), "unexpected reason: {reason}");
            assert!(*persisted);
        }
        other => panic!("expected seeding, got {other:?}"),
    }
    assert!(load_from_path(&path).is_ok());
}

#[test]
fn inconsistent_file_takes_the_seed_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("travel_data.json");
    let mut data = TravelData::defaults();
    data.total_days = 2;
    data.save_as(&path).unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(TravelError::InvalidData(_))
    ));
    let outcome = load_or_seed(&path);
    assert!(outcome.was_seeded());
    assert_eq!(outcome.data.total_days, 3);
}

#[test]
fn write_failure_still_serves_defaults() {
    let dir = tempdir().unwrap();
    // A regular file where a directory is expected makes the write fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let path = blocker.join("travel_data.json");

    let outcome = load_or_seed(&path);

    assert!(matches!(
        outcome.source,
        DataSource::Seeded { persisted: false, .. }
    ));
    assert_eq!(outcome.data.locations.len(), 5);
    assert_eq!(outcome.data.routes.len(), 3);
}

#[test]
fn strict_loader_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TravelError::NotFound(_)));
}

#[test]
fn totals_match_max_referenced_day_after_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("travel_data.json");
    load_or_seed(&path);
    let data = load_from_path(&path).unwrap();
    assert_eq!(data.total_days, data.max_day());
}

#[test]
fn sparse_file_loads_without_seeding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("travel_data.json");
    let sparse = r#"{"locations":[{"id":7,"name":"Pier","lat":1.0,"lng":2.0,"day":1,"photos":[{"full":"f.jpg","caption":"c"}]}],"routes":[],"totalDays":1}"#;
    fs::write(&path, sparse).unwrap();

    let outcome = load_or_seed(&path);

    assert_eq!(outcome.source, DataSource::Loaded(path.clone()));
    let photo = &outcome.data.locations[0].photos[0];
    assert_eq!(photo.thumbnail, "");
    assert_eq!(photo.display_url(), "f.jpg");
    // The user's file is left alone.
    assert_eq!(fs::read_to_string(&path).unwrap(), sparse);
}
