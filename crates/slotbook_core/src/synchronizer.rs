// --- File: crates/slotbook_core/src/synchronizer.rs ---
//! Keeps the slot registry consistent with the booking directory for the
//! active date.
//!
//! Each remote interaction is available in two shapes. The single-call
//! operations ([`AvailabilitySynchronizer::on_date_selected`],
//! [`AvailabilitySynchronizer::commit_booking`]) await the directory while
//! holding `&mut self`. Hosts that keep processing input while a call is in
//! flight use the split-phase form: `begin_*`/`prepare_*` hands out a pending
//! value that owns the request, the host runs it wherever it likes, and feeds
//! the response back through `complete_*`.

use chrono::NaiveDate;
use slotbook_common::{
    BookingDirectory, BookingRecord, BookingRequest, DirectoryError, SlotDefinition, SlotId,
};
use slotbook_config::OnBooked;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{BookingError, CommitError, FetchError, ValidationError};
use crate::registry::{Slot, SlotRegistry};

/// A fetch of the booked set, tagged with the date it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    date: NaiveDate,
}

impl PendingFetch {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub async fn run(self, directory: &dyn BookingDirectory) -> FetchResponse {
        debug!("Fetching bookings for {}", self.date);
        let result = directory.list_bookings(self.date).await;
        FetchResponse::new(self.date, result)
    }
}

/// The directory's answer to a [`PendingFetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub date: NaiveDate,
    pub result: Result<Vec<BookingRecord>, DirectoryError>,
}

impl FetchResponse {
    pub fn new(date: NaiveDate, result: Result<Vec<BookingRecord>, DirectoryError>) -> Self {
        Self { date, result }
    }
}

/// What a completed fetch did to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The booked set for `date` replaced the previous one.
    Applied { date: NaiveDate, booked: Vec<SlotId> },
    /// The response belonged to a date that is no longer active.
    Discarded {
        issued_for: NaiveDate,
        active: Option<NaiveDate>,
    },
    /// No date is active; every slot was reset to free.
    Cleared,
}

/// A validated booking request ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    request: BookingRequest,
}

impl PendingCommit {
    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub async fn run(self, directory: &dyn BookingDirectory) -> CommitResponse {
        debug!(
            "Submitting booking for slot {} on {}",
            self.request.slot_id, self.request.date
        );
        let result = directory.create_booking(self.request.clone()).await;
        CommitResponse::new(self.request, result)
    }
}

/// The directory's answer to a [`PendingCommit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResponse {
    pub request: BookingRequest,
    pub result: Result<BookingRecord, DirectoryError>,
}

impl CommitResponse {
    pub fn new(request: BookingRequest, result: Result<BookingRecord, DirectoryError>) -> Self {
        Self { request, result }
    }
}

/// A booking the directory acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub date: NaiveDate,
    pub time_label: String,
    pub record: BookingRecord,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking Confirmed!\nDate: {}\nTime: {}",
            self.date, self.time_label
        )
    }
}

pub struct AvailabilitySynchronizer {
    registry: SlotRegistry,
    directory: Arc<dyn BookingDirectory>,
    policy: OnBooked,
    active_date: Option<NaiveDate>,
    loading: Option<NaiveDate>,
    stale: bool,
    /// Bookings the directory acknowledged to this synchronizer. A fetch issued
    /// before an acknowledgment may still answer without it.
    committed: Vec<(NaiveDate, SlotId)>,
}

impl fmt::Debug for AvailabilitySynchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilitySynchronizer")
            .field("registry", &self.registry)
            .field("policy", &self.policy)
            .field("active_date", &self.active_date)
            .field("loading", &self.loading)
            .field("stale", &self.stale)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}

impl AvailabilitySynchronizer {
    pub fn new(
        directory: Arc<dyn BookingDirectory>,
        definitions: impl IntoIterator<Item = SlotDefinition>,
        policy: OnBooked,
    ) -> Self {
        Self {
            registry: SlotRegistry::new(definitions),
            directory,
            policy,
            active_date: None,
            loading: None,
            stale: false,
            committed: Vec::new(),
        }
    }

    /// Synchronizer over the six standard daily slots.
    pub fn with_standard_slots(directory: Arc<dyn BookingDirectory>, policy: OnBooked) -> Self {
        Self::new(directory, SlotDefinition::standard(), policy)
    }

    // --- Date changes ---

    /// Switches the active date and loads its booked set.
    pub async fn on_date_selected(
        &mut self,
        date: Option<NaiveDate>,
    ) -> Result<FetchOutcome, FetchError> {
        match self.begin_date_change(date) {
            Some(pending) => {
                let response = pending.run(self.directory.as_ref()).await;
                self.complete_fetch(response)
            }
            None => Ok(FetchOutcome::Cleared),
        }
    }

    /// First half of [`Self::on_date_selected`].
    ///
    /// Clears the selection and returns the fetch to run, or `None` when the
    /// date was cleared (every slot is then reset to free immediately).
    pub fn begin_date_change(&mut self, date: Option<NaiveDate>) -> Option<PendingFetch> {
        self.active_date = date;
        self.registry.clear_selection();
        match date {
            Some(date) => {
                info!("Active date changed to {}", date);
                self.loading = Some(date);
                Some(PendingFetch { date })
            }
            None => {
                info!("Active date cleared");
                self.registry.apply_booked_set(std::iter::empty());
                self.loading = None;
                self.stale = false;
                None
            }
        }
    }

    /// Re-fetches the booked set of the active date, keeping the selection.
    pub fn begin_refresh(&mut self) -> Option<PendingFetch> {
        let date = self.active_date?;
        self.loading = Some(date);
        Some(PendingFetch { date })
    }

    /// Applies a fetch response, unless its date is no longer the active one.
    pub fn complete_fetch(&mut self, response: FetchResponse) -> Result<FetchOutcome, FetchError> {
        let FetchResponse { date, result } = response;
        if self.active_date != Some(date) {
            debug!(
                "Discarding bookings fetched for {} (active date is {:?})",
                date, self.active_date
            );
            return Ok(FetchOutcome::Discarded {
                issued_for: date,
                active: self.active_date,
            });
        }

        self.loading = None;
        match result {
            Ok(records) => {
                let mut booked: Vec<SlotId> = records
                    .into_iter()
                    .filter(|record| record.date == date)
                    .map(|record| record.slot_id)
                    .collect();
                for (_, slot_id) in self.committed.iter().filter(|(day, _)| *day == date) {
                    if !booked.contains(slot_id) {
                        booked.push(slot_id.clone());
                    }
                }
                self.registry.apply_booked_set(&booked);
                self.stale = false;
                debug!("{} slots booked on {}", booked.len(), date);
                Ok(FetchOutcome::Applied { date, booked })
            }
            Err(source) => {
                warn!("Keeping previous availability, fetch for {} failed: {}", date, source);
                self.stale = true;
                Err(FetchError { date, source })
            }
        }
    }

    // --- Selection ---

    pub fn toggle_slot(&mut self, slot_id: &SlotId) -> &[Slot] {
        self.registry.toggle_selection(slot_id)
    }

    // --- Commit ---

    /// Books the selected slot for the active date.
    pub async fn commit_booking(&mut self) -> Result<BookingConfirmation, BookingError> {
        let pending = self.prepare_commit()?;
        let response = pending.run(self.directory.as_ref()).await;
        Ok(self.complete_commit(response)?)
    }

    /// Checks the commit preconditions and builds the request. Mutates nothing.
    pub fn prepare_commit(&self) -> Result<PendingCommit, ValidationError> {
        let date = self.active_date.ok_or(ValidationError::NoDateSelected)?;
        let slot = self
            .registry
            .selected_slot()
            .filter(|slot| !slot.is_booked())
            .ok_or(ValidationError::NoSlotSelected)?;
        Ok(PendingCommit {
            request: BookingRequest {
                date,
                slot_id: slot.id().clone(),
                time_label: slot.label().to_string(),
            },
        })
    }

    /// Applies the directory's answer to a commit.
    ///
    /// The registry only changes on acknowledgment, and only while the
    /// request's date is still active. The booked slot stays booked through
    /// later fetches for that date, and any selection made in the meantime is
    /// dropped.
    pub fn complete_commit(
        &mut self,
        response: CommitResponse,
    ) -> Result<BookingConfirmation, CommitError> {
        let CommitResponse { request, result } = response;
        match result {
            Ok(record) => {
                if self.active_date == Some(request.date) {
                    self.registry.clear_selection();
                    self.registry.mark_booked(&request.slot_id);
                } else {
                    debug!(
                        "Booking for {} acknowledged after the date changed, registry untouched",
                        request.date
                    );
                }
                let key = (request.date, request.slot_id.clone());
                if !self.committed.contains(&key) {
                    self.committed.push(key);
                }
                info!("Booked slot {} on {}", request.slot_id, request.date);
                Ok(BookingConfirmation {
                    date: request.date,
                    time_label: request.time_label,
                    record,
                })
            }
            Err(source) => {
                warn!(
                    "Booking slot {} on {} failed: {}",
                    request.slot_id, request.date, source
                );
                Err(CommitError { request, source })
            }
        }
    }

    // --- Queries ---

    pub fn can_commit(&self) -> bool {
        self.active_date.is_some() && self.registry.has_selection()
    }

    pub fn active_date(&self) -> Option<NaiveDate> {
        self.active_date
    }

    /// True while the booked set of the active date has not arrived yet.
    pub fn is_loading(&self) -> bool {
        self.loading.is_some() && self.loading == self.active_date
    }

    /// True after a failed fetch, until the next successful one.
    pub fn is_availability_stale(&self) -> bool {
        self.stale
    }

    pub fn policy(&self) -> OnBooked {
        self.policy
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn slots(&self) -> &[Slot] {
        self.registry.slots()
    }

    /// The slots to render, according to the configured [`OnBooked`] policy.
    pub fn visible_slots(&self) -> Vec<&Slot> {
        self.registry.visible_slots(self.policy)
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.registry.selected_slot()
    }

    pub fn directory(&self) -> Arc<dyn BookingDirectory> {
        Arc::clone(&self.directory)
    }
}
