// --- File: crates/services/slotbook_client/src/view.rs ---
use slotbook_core::{AvailabilitySynchronizer, SlotStatus};
use std::fmt::Write;

/// Renders the slot list the way the booking widget shows it.
pub fn render(sync: &AvailabilitySynchronizer) -> String {
    let mut out = String::new();

    match sync.active_date() {
        Some(date) => {
            let _ = write!(out, "Date: {date}");
            if sync.is_loading() {
                out.push_str(" (loading availability...)");
            } else if sync.is_availability_stale() {
                out.push_str(" (availability may be out of date)");
            }
        }
        None => out.push_str("Date: none selected"),
    }
    out.push('\n');

    for slot in sync.visible_slots() {
        let (marker, note) = match slot.status() {
            SlotStatus::Free => ("[ ]", ""),
            SlotStatus::Selected => ("[x]", ""),
            SlotStatus::Booked => ("[-]", "  booked"),
        };
        let _ = writeln!(out, "  {marker} {:>2}  {:<8}{note}", slot.id().as_str(), slot.label());
    }

    if sync.can_commit() {
        out.push_str("Type 'book' to confirm.\n");
    }
    out
}
