use chrono::NaiveDate;

use serde_json::json;

use logistik_scheduler::controllers::multi_transport_controller::plan_multi_transport;
use logistik_scheduler::controllers::transport_controller::plan_transport;
use logistik_scheduler::services::{
    available_slots, insert_if_absent, lookup_distance, meters_to_minutes, resolve_route, slot_grid,
    InMemoryStore,
};

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test]
async fn test_reverse_lookup_and_distinct_reverse_row() {
    let store = InMemoryStore::new();
    insert_if_absent(&store, "A", "B", 5.0).await.unwrap();

    assert_eq!(lookup_distance(&store, "B", "A").await.unwrap(), Some(5.0));

    // la fila inversa es un par distinto y no pisa (A, B)
    assert!(insert_if_absent(&store, "B", "A", 5.0).await.unwrap());
    assert_eq!(store.distance_row_count("A", "B").await, 1);
    assert_eq!(store.distance_row_count("B", "A").await, 1);
}

#[tokio::test]
async fn test_insert_twice_keeps_one_row() {
    let store = InMemoryStore::new();
    insert_if_absent(&store, "A", "B", 5.0).await.unwrap();
    insert_if_absent(&store, "A", "B", 5.0).await.unwrap();

    assert_eq!(store.distance_row_count("A", "B").await, 1);
}

#[tokio::test]
async fn test_partial_route_under_reports_total() {
    let store = InMemoryStore::new();
    insert_if_absent(&store, "A", "B", 5.0).await.unwrap();

    let resolution = resolve_route(&store, &[("A", "B"), ("B", "C")]).await.unwrap();

    assert_eq!(resolution.per_leg, vec![Some(5.0), None]);
    assert_eq!(resolution.total_minutes, 5.0);
}

#[tokio::test]
async fn test_empty_day_has_48_slots() {
    let store = InMemoryStore::new();
    let slots = available_slots(&store, "Jumbo", new_year()).await.unwrap();

    assert_eq!(slots.len(), 48);
    assert_eq!(slots.first().map(String::as_str), Some("00:00"));
    assert_eq!(slots.last().map(String::as_str), Some("23:30"));
    assert_eq!(slots, slot_grid());
}

#[tokio::test]
async fn test_long_transport_blocks_only_its_start() {
    let store = InMemoryStore::new();
    insert_if_absent(&store, "Lager", "Werk 2", 95.0).await.unwrap();
    store.book_transport("Jumbo", new_year(), "08:00").await;

    let slots = available_slots(&store, "Jumbo", new_year()).await.unwrap();

    let mut expected = slot_grid();
    expected.retain(|s| s != "08:00");
    assert_eq!(slots, expected);
    assert!(slots.contains(&"08:30".to_string()));
}

#[tokio::test]
async fn test_transport_and_multi_transport_starts_both_block() {
    let store = InMemoryStore::new();
    store.book_transport("Bonsai", new_year(), "06:00").await;
    store.book_multi_transport("Bonsai", new_year(), "14:30").await;

    let slots = available_slots(&store, "Bonsai", new_year()).await.unwrap();

    assert_eq!(slots.len(), 46);
    assert!(!slots.contains(&"06:00".to_string()));
    assert!(!slots.contains(&"14:30".to_string()));
}

#[tokio::test]
async fn test_transport_without_distance_keeps_null_minutes() {
    let store = InMemoryStore::new();
    let request = serde_json::from_value(json!({
        "from_location": "Lager",
        "to_location": "Werk 2",
        "vehicle_type": "Traileryard",
        "date": "2024-01-01",
        "start_time": "07:30",
        "time_window": "2024-01-01T07:30:00"
    }))
    .unwrap();

    let new = plan_transport(&store, request).await.unwrap();
    assert_eq!(new.travel_minutes, None);
}

#[tokio::test]
async fn test_partial_multi_transport_stores_zero_leg() {
    let store = InMemoryStore::new();
    insert_if_absent(&store, "A", "B", 5.0).await.unwrap();
    let request = serde_json::from_value(json!({
        "name": "Route A-B-C",
        "vehicle_type": "Jumbo",
        "date": "2024-01-01",
        "start_time": "09:00",
        "legs": [
            { "from_location": "A", "to_location": "B", "sequence": 1 },
            { "from_location": "B", "to_location": "C", "sequence": 2 }
        ]
    }))
    .unwrap();

    let new = plan_multi_transport(&store, request).await.unwrap();
    assert_eq!(new.legs[0].minutes, 5.0);
    assert_eq!(new.legs[1].minutes, 0.0);
    assert_eq!(new.total_minutes, 5.0);
}

#[test]
fn test_meters_to_minutes_examples() {
    assert_eq!(meters_to_minutes(1000.0), 11.0);
    assert_eq!(meters_to_minutes(10.0), 8.0);
    assert_eq!(meters_to_minutes(0.0), 8.0);
    assert_eq!(meters_to_minutes(575.0), 8.4);
}
