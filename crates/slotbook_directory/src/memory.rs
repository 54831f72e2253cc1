// --- File: crates/slotbook_directory/src/memory.rs ---
use async_trait::async_trait;
use chrono::NaiveDate;
use slotbook_common::{BookingDirectory, BookingRecord, BookingRequest, DirectoryError};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Booking directory kept in process memory, keyed by date.
///
/// Used when no database is configured, and as the server side of tests.
#[derive(Debug, Default)]
pub struct InMemoryBookingDirectory {
    bookings: RwLock<HashMap<NaiveDate, Vec<BookingRecord>>>,
}

impl InMemoryBookingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory pre-populated with existing bookings.
    pub fn with_bookings(records: impl IntoIterator<Item = BookingRecord>) -> Self {
        let mut bookings: HashMap<NaiveDate, Vec<BookingRecord>> = HashMap::new();
        for record in records {
            bookings.entry(record.date).or_default().push(record);
        }
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BookingDirectory for InMemoryBookingDirectory {
    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DirectoryError> {
        let bookings = self.bookings.read().await;
        let records = bookings.get(&date).cloned().unwrap_or_default();
        debug!("{} bookings stored for {}", records.len(), date);
        Ok(records)
    }

    async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingRecord, DirectoryError> {
        // The write lock makes check-then-insert atomic.
        let mut bookings = self.bookings.write().await;
        let day = bookings.entry(request.date).or_default();
        if day.iter().any(|record| record.slot_id == request.slot_id) {
            return Err(DirectoryError::Conflict {
                date: request.date,
                slot_id: request.slot_id,
            });
        }

        let record = BookingRecord::accept(request);
        info!(
            "Stored booking {} for slot {} on {}",
            record.id, record.slot_id, record.date
        );
        day.push(record.clone());
        Ok(record)
    }
}
