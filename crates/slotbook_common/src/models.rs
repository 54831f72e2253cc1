// --- File: crates/slotbook_common/src/models.rs ---

// Data structures shared by the booking directory server, its HTTP client and
// the availability core.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of one of the fixed daily slots.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(value_type = String, example = "2"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SlotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The fixed daily slot set, in display order: (id, time label).
pub const STANDARD_SLOTS: [(&str, &str); 6] = [
    ("1", "8:10 AM"),
    ("2", "9:30 AM"),
    ("3", "12:30 PM"),
    ("4", "5:00 PM"),
    ("5", "9:00 PM"),
    ("6", "10:30 PM"),
];

/// Definition of one bookable slot: identity plus display label.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub id: SlotId,
    #[cfg_attr(feature = "openapi", schema(example = "9:30 AM"))]
    pub label: String,
}

impl SlotDefinition {
    pub fn new(id: impl Into<SlotId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The [`STANDARD_SLOTS`] as owned definitions.
    pub fn standard() -> Vec<SlotDefinition> {
        STANDARD_SLOTS
            .iter()
            .map(|(id, label)| SlotDefinition::new(*id, *label))
            .collect()
    }

    /// Looks up a slot of the standard set by id.
    pub fn find_standard(id: &SlotId) -> Option<SlotDefinition> {
        STANDARD_SLOTS
            .iter()
            .find(|(candidate, _)| *candidate == id.as_str())
            .map(|(id, label)| SlotDefinition::new(*id, *label))
    }
}

/// A request to persist one booking. Also the body of `POST /api/bookings`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-10"))]
    pub date: NaiveDate,
    pub slot_id: SlotId,
    #[cfg_attr(feature = "openapi", schema(example = "5:00 PM"))]
    pub time_label: String,
}

/// A booking persisted by the directory.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub slot_id: SlotId,
    pub time_label: String,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Builds a fresh record (new id, current timestamp) for an accepted request.
    pub fn accept(request: BookingRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: request.date,
            slot_id: request.slot_id,
            time_label: request.time_label,
            created_at: Utc::now(),
        }
    }
}

/// Query string of `GET /api/bookings`.
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookingsQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-10"))]
    pub date: String,
}

/// Body of a successful `GET /api/bookings`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub date: NaiveDate,
    pub bookings: Vec<BookingRecord>,
}
