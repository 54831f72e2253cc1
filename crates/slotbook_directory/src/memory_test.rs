// --- File: crates/slotbook_directory/src/memory_test.rs ---
use crate::memory::InMemoryBookingDirectory;
use chrono::NaiveDate;
use slotbook_common::{BookingDirectory, BookingRequest, DirectoryError, SlotId};
use std::sync::Arc;

fn request(date: NaiveDate, slot_id: &str, label: &str) -> BookingRequest {
    BookingRequest {
        date,
        slot_id: SlotId::new(slot_id),
        time_label: label.to_string(),
    }
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

#[tokio::test]
async fn test_created_booking_is_listed_for_its_date_only() {
    let directory = InMemoryBookingDirectory::new();

    let record = directory
        .create_booking(request(march(10), "2", "9:30 AM"))
        .await
        .unwrap();

    assert_eq!(record.slot_id, SlotId::new("2"));
    assert_eq!(directory.list_bookings(march(10)).await.unwrap(), vec![record]);
    assert!(directory.list_bookings(march(11)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let directory = InMemoryBookingDirectory::new();
    directory
        .create_booking(request(march(10), "4", "5:00 PM"))
        .await
        .unwrap();

    let err = directory
        .create_booking(request(march(10), "4", "5:00 PM"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DirectoryError::Conflict {
            date: march(10),
            slot_id: SlotId::new("4"),
        }
    );
    assert_eq!(directory.len().await, 1);

    // Same slot, other date is fine.
    directory
        .create_booking(request(march(11), "4", "5:00 PM"))
        .await
        .unwrap();
    assert_eq!(directory.len().await, 2);
}

#[tokio::test]
async fn test_concurrent_bookings_for_one_slot_admit_exactly_one() {
    let directory = Arc::new(InMemoryBookingDirectory::new());

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let directory = Arc::clone(&directory);
            tokio::spawn(async move {
                directory
                    .create_booking(request(march(10), "1", "8:10 AM"))
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(err) => assert!(err.is_conflict()),
        }
    }
    assert_eq!(accepted, 1);
}

#[tokio::test]
async fn test_with_bookings_seeds_store() {
    let seeded = slotbook_common::BookingRecord::accept(request(march(12), "6", "10:30 PM"));
    let directory = InMemoryBookingDirectory::with_bookings(vec![seeded.clone()]);

    assert!(!directory.is_empty().await);
    assert_eq!(directory.list_bookings(march(12)).await.unwrap(), vec![seeded]);
}
