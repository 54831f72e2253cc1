use crate::bookings::SqlBookingDirectory;
use crate::client::DbClient;
use chrono::NaiveDate;
use slotbook_common::{BookingDirectory, BookingRequest, DirectoryError, SlotId};

async fn store() -> SqlBookingDirectory {
    let client = DbClient::from_url("sqlite::memory:").await.unwrap();
    let store = SqlBookingDirectory::new(client);
    store.init_schema().await.unwrap();
    store
}

fn request(day: u32, slot_id: &str, label: &str) -> BookingRequest {
    BookingRequest {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        slot_id: SlotId::new(slot_id),
        time_label: label.to_string(),
    }
}

#[tokio::test]
async fn test_booking_round_trips_through_table() {
    let store = store().await;

    let created = store
        .create_booking(request(10, "3", "12:30 PM"))
        .await
        .unwrap();
    let listed = store
        .list_bookings(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].slot_id, SlotId::new("3"));
    assert_eq!(listed[0].time_label, "12:30 PM");
    assert_eq!(listed[0].created_at.timestamp(), created.created_at.timestamp());
}

#[tokio::test]
async fn test_unique_constraint_reports_conflict() {
    let store = store().await;
    store
        .create_booking(request(10, "2", "9:30 AM"))
        .await
        .unwrap();

    let err = store
        .create_booking(request(10, "2", "9:30 AM"))
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::Conflict { .. }));
    let other_day = store.create_booking(request(11, "2", "9:30 AM")).await;
    assert!(other_day.is_ok());
}

#[tokio::test]
async fn test_listing_is_scoped_by_date() {
    let store = store().await;
    store
        .create_booking(request(10, "1", "8:10 AM"))
        .await
        .unwrap();
    store
        .create_booking(request(12, "6", "10:30 PM"))
        .await
        .unwrap();

    let eleventh = store
        .list_bookings(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap())
        .await
        .unwrap();
    assert!(eleventh.is_empty());
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let store = store().await;
    store.init_schema().await.unwrap();
}

#[tokio::test]
async fn test_missing_table_is_unavailable() {
    let client = DbClient::from_url("sqlite::memory:").await.unwrap();
    let store = SqlBookingDirectory::new(client);

    let err = store
        .list_bookings(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .await
        .unwrap_err();

    assert!(err.is_transient());
}
