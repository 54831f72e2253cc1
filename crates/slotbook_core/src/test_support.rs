// --- File: crates/slotbook_core/src/test_support.rs ---
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::mock;
use slotbook_common::{BookingDirectory, BookingRecord, BookingRequest, DirectoryError, SlotId};
use slotbook_config::OnBooked;
use std::sync::Arc;
use uuid::Uuid;

use crate::synchronizer::AvailabilitySynchronizer;

mock! {
    pub Directory {}

    #[async_trait]
    impl BookingDirectory for Directory {
        async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DirectoryError>;
        async fn create_booking(&self, request: BookingRequest) -> Result<BookingRecord, DirectoryError>;
    }
}

pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test date")
}

pub fn id(value: &str) -> SlotId {
    SlotId::new(value)
}

pub fn record(date: NaiveDate, slot_id: &str, time_label: &str) -> BookingRecord {
    BookingRecord {
        id: Uuid::new_v4(),
        date,
        slot_id: id(slot_id),
        time_label: time_label.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}

pub fn acknowledged(request: &BookingRequest) -> BookingRecord {
    record(request.date, request.slot_id.as_str(), &request.time_label)
}

pub fn synchronizer(directory: MockDirectory) -> AvailabilitySynchronizer {
    synchronizer_with(directory, OnBooked::MarkImmutable)
}

pub fn synchronizer_with(directory: MockDirectory, policy: OnBooked) -> AvailabilitySynchronizer {
    AvailabilitySynchronizer::with_standard_slots(Arc::new(directory), policy)
}

/// (id, selected, booked) for every slot, in order.
pub fn snapshot(sync: &AvailabilitySynchronizer) -> Vec<(String, bool, bool)> {
    sync.slots()
        .iter()
        .map(|slot| (slot.id().to_string(), slot.is_selected(), slot.is_booked()))
        .collect()
}
