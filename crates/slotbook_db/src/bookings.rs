//! SQL implementation of the booking directory

use crate::error::DbError;
use crate::DbClient;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use slotbook_common::{
    calendar::DATE_FORMAT, BookingDirectory, BookingRecord, BookingRequest, DirectoryError, SlotId,
};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Booking directory backed by the `bookings` table
#[derive(Debug, Clone)]
pub struct SqlBookingDirectory {
    /// The database client
    db_client: DbClient,
}

impl SqlBookingDirectory {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    /// Creates the `bookings` table if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing bookings schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id TEXT PRIMARY KEY,
                booking_date TEXT NOT NULL,
                slot_id TEXT NOT NULL,
                time_label TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE(booking_date, slot_id)
            )
        "#;
        self.db_client.execute(query).await?;

        info!("Bookings schema initialized successfully");
        Ok(())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DbError> {
        let query = r#"
            SELECT id, booking_date, slot_id, time_label, created_at
            FROM bookings
            WHERE booking_date = $1
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(date.format(DATE_FORMAT).to_string())
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list bookings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(record_from_row).collect()
    }

    async fn insert(&self, record: &BookingRecord) -> Result<(), sqlx::Error> {
        let query = r#"
            INSERT INTO bookings (id, booking_date, slot_id, time_label, created_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.date.format(DATE_FORMAT).to_string())
            .bind(record.slot_id.as_str().to_string())
            .bind(record.time_label.clone())
            .bind(record.created_at.to_rfc3339())
            .execute(self.db_client.pool())
            .await
            .map(|_| ())
    }
}

// Dates and timestamps are stored as text; the Any driver has no chrono codecs.
fn record_from_row(row: &AnyRow) -> Result<BookingRecord, DbError> {
    let text = |column: &str| -> Result<String, DbError> {
        row.try_get::<String, _>(column)
            .map_err(|e| DbError::DecodeError(format!("{column}: {e}")))
    };

    let id = Uuid::parse_str(&text("id")?)
        .map_err(|e| DbError::DecodeError(format!("id: {e}")))?;
    let date = NaiveDate::parse_from_str(&text("booking_date")?, DATE_FORMAT)
        .map_err(|e| DbError::DecodeError(format!("booking_date: {e}")))?;
    let created_at = DateTime::parse_from_rfc3339(&text("created_at")?)
        .map_err(|e| DbError::DecodeError(format!("created_at: {e}")))?
        .with_timezone(&Utc);

    Ok(BookingRecord {
        id,
        date,
        slot_id: SlotId::new(text("slot_id")?),
        time_label: text("time_label")?,
        created_at,
    })
}

#[async_trait]
impl BookingDirectory for SqlBookingDirectory {
    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DirectoryError> {
        let records = self.find_by_date(date).await?;
        debug!("{} bookings stored for {}", records.len(), date);
        Ok(records)
    }

    async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingRecord, DirectoryError> {
        let record = BookingRecord::accept(request);

        match self.insert(&record).await {
            Ok(()) => {
                info!(
                    "Stored booking {} for slot {} on {}",
                    record.id, record.slot_id, record.date
                );
                Ok(record)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!("Slot {} on {} already taken", record.slot_id, record.date);
                Err(DirectoryError::Conflict {
                    date: record.date,
                    slot_id: record.slot_id,
                })
            }
            Err(e) => {
                error!("Failed to insert booking: {}", e);
                Err(DbError::QueryError(e.to_string()).into())
            }
        }
    }
}
