// --- File: crates/services/slotbook_client/src/host.rs ---
//! Drives an [`AvailabilitySynchronizer`] from console commands.
//!
//! Remote calls run on spawned tasks through the split-phase API and report
//! back as [`Completion`]s, so input keeps flowing while a fetch or a commit is
//! outstanding. A fetch answer for a date the user already left is discarded
//! by the synchronizer.

use slotbook_common::{calendar::is_past, BookingDirectory};
use slotbook_config::BookingConfig;
use slotbook_core::{
    AvailabilitySynchronizer, CommitResponse, FetchOutcome, FetchResponse, PendingCommit,
    PendingFetch,
};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::command::{parse_command, Command, HELP};
use crate::view::render;

/// Result of a remote call started by the host.
#[derive(Debug)]
pub enum Completion {
    Fetch(FetchResponse),
    Commit(CommitResponse),
}

/// What the event loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Host {
    sync: AvailabilitySynchronizer,
    booking: BookingConfig,
    completions: UnboundedSender<Completion>,
    commit_in_flight: bool,
}

impl Host {
    pub fn new(
        sync: AvailabilitySynchronizer,
        booking: BookingConfig,
    ) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, receiver) = unbounded_channel();
        let host = Self {
            sync,
            booking,
            completions,
            commit_in_flight: false,
        };
        (host, receiver)
    }

    pub fn synchronizer(&self) -> &AvailabilitySynchronizer {
        &self.sync
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Step::Continue(String::new()),
            Err(e) => return Step::Continue(e.to_string()),
        };

        let message = match command {
            Command::Date(date) => {
                if !self.booking.allow_past_dates && is_past(date, &self.booking.time_zone) {
                    return Step::Continue(format!("{date} lies in the past, pick another date."));
                }
                if let Some(pending) = self.sync.begin_date_change(Some(date)) {
                    self.spawn_fetch(pending);
                }
                render(&self.sync)
            }
            Command::ClearDate => {
                self.sync.begin_date_change(None);
                render(&self.sync)
            }
            Command::Click(_) if self.commit_in_flight => {
                "Wait for the pending booking to finish before changing the selection."
                    .to_string()
            }
            Command::Click(slot_id) => {
                let booked_label = self
                    .sync
                    .registry()
                    .slot(&slot_id)
                    .map(|slot| slot.is_booked().then(|| slot.label().to_string()));
                match booked_label {
                    None => format!("There is no slot '{slot_id}'."),
                    Some(Some(label)) => format!("{label} is already booked."),
                    Some(None) => {
                        self.sync.toggle_slot(&slot_id);
                        render(&self.sync)
                    }
                }
            }
            Command::Book => self.book(),
            Command::Refresh => match self.sync.begin_refresh() {
                Some(pending) => {
                    self.spawn_fetch(pending);
                    "Reloading availability...".to_string()
                }
                None => "Select a date first.".to_string(),
            },
            Command::Show => render(&self.sync),
            Command::Help => HELP.to_string(),
            Command::Quit => return Step::Quit,
        };
        Step::Continue(message)
    }

    /// Applies a finished remote call. `None` when there is nothing to tell.
    pub fn handle_completion(&mut self, completion: Completion) -> Option<String> {
        match completion {
            Completion::Fetch(response) => match self.sync.complete_fetch(response) {
                Ok(FetchOutcome::Discarded { issued_for, .. }) => {
                    debug!("Dropped availability for {}", issued_for);
                    None
                }
                Ok(_) => Some(render(&self.sync)),
                Err(e) => Some(format!(
                    "{e}\nShowing the last known availability.\n{}",
                    render(&self.sync)
                )),
            },
            Completion::Commit(response) => {
                self.commit_in_flight = false;
                let message = match self.sync.complete_commit(response) {
                    Ok(confirmation) => format!("{confirmation}\n{}", render(&self.sync)),
                    Err(e) if e.is_conflict() => format!(
                        "{} on {} was just booked by someone else. Type 'refresh' to reload.",
                        e.request.time_label, e.request.date
                    ),
                    Err(e) => format!("{e}\nYour selection is kept, type 'book' to try again."),
                };
                Some(message)
            }
        }
    }

    fn book(&mut self) -> String {
        if self.commit_in_flight {
            return "A booking is already being submitted.".to_string();
        }
        match self.sync.prepare_commit() {
            Ok(pending) => {
                let message = format!(
                    "Booking {} on {}...",
                    pending.request().time_label,
                    pending.request().date
                );
                self.commit_in_flight = true;
                self.spawn_commit(pending);
                message
            }
            Err(e) => e.to_string(),
        }
    }

    fn spawn_fetch(&self, pending: PendingFetch) {
        let directory: Arc<dyn BookingDirectory> = self.sync.directory();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let response = pending.run(directory.as_ref()).await;
            // The receiver is gone only when the host is shutting down.
            let _ = completions.send(Completion::Fetch(response));
        });
    }

    fn spawn_commit(&self, pending: PendingCommit) {
        let directory = self.sync.directory();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let response = pending.run(directory.as_ref()).await;
            let _ = completions.send(Completion::Commit(response));
        });
    }
}
