// --- File: crates/slotbook_core/src/registry.rs ---
//! The slot registry: the only place slot flags are mutated.
//!
//! Invariants held after every public call:
//! - at most one slot is selected;
//! - a booked slot is never selected.

use serde::Serialize;
use slotbook_common::{SlotDefinition, SlotId};
use slotbook_config::OnBooked;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Derived display state of a slot for the active date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Selected,
    Booked,
}

/// One fixed daily slot with its date-scoped flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    id: SlotId,
    label: String,
    selected: bool,
    booked: bool,
}

impl Slot {
    fn from_definition(definition: SlotDefinition) -> Self {
        Self {
            id: definition.id,
            label: definition.label,
            selected: false,
            booked: false,
        }
    }

    pub fn id(&self) -> &SlotId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    pub fn status(&self) -> SlotStatus {
        if self.booked {
            SlotStatus::Booked
        } else if self.selected {
            SlotStatus::Selected
        } else {
            SlotStatus::Free
        }
    }
}

/// Ordered collection of the fixed daily slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
}

impl SlotRegistry {
    pub fn new(definitions: impl IntoIterator<Item = SlotDefinition>) -> Self {
        let mut registry = Self::default();
        registry.initialize(definitions);
        registry
    }

    /// Registry over the six standard daily slots.
    pub fn standard() -> Self {
        Self::new(SlotDefinition::standard())
    }

    /// Replaces all state with fresh, free slots in definition order.
    ///
    /// A repeated id keeps its first definition.
    pub fn initialize(&mut self, definitions: impl IntoIterator<Item = SlotDefinition>) {
        let mut seen = HashSet::new();
        self.slots = definitions
            .into_iter()
            .filter(|definition| {
                let fresh = seen.insert(definition.id.clone());
                if !fresh {
                    warn!("Ignoring duplicate slot definition {}", definition.id);
                }
                fresh
            })
            .map(Slot::from_definition)
            .collect();
        debug!("Slot registry initialized with {} slots", self.slots.len());
    }

    /// Handles a click on a slot and returns the updated sequence.
    ///
    /// Booked and unknown slots are left alone. Clicking the selected slot
    /// deselects it; clicking any other free slot moves the selection there.
    pub fn toggle_selection(&mut self, slot_id: &SlotId) -> &[Slot] {
        let Some(target) = self.slots.iter().find(|slot| &slot.id == slot_id) else {
            debug!("Click on unknown slot {} ignored", slot_id);
            return &self.slots;
        };
        if target.booked {
            debug!("Click on booked slot {} ignored", slot_id);
            return &self.slots;
        }

        let select = !target.selected;
        for slot in &mut self.slots {
            slot.selected = select && &slot.id == slot_id;
        }
        debug!(
            "Slot {} {}",
            slot_id,
            if select { "selected" } else { "deselected" }
        );
        &self.slots
    }

    /// Recomputes every `booked` flag from `booked_ids`.
    ///
    /// This replaces, never merges: a slot missing from `booked_ids` becomes free.
    pub fn apply_booked_set<'a, I>(&mut self, booked_ids: I)
    where
        I: IntoIterator<Item = &'a SlotId>,
    {
        let booked: HashSet<&SlotId> = booked_ids.into_iter().collect();
        for slot in &mut self.slots {
            slot.booked = booked.contains(&slot.id);
            if slot.booked {
                slot.selected = false;
            }
        }
        let unknown = booked
            .iter()
            .filter(|id| !self.slots.iter().any(|slot| &&slot.id == *id))
            .count();
        if unknown > 0 {
            debug!("{} booked slot ids do not belong to this registry", unknown);
        }
    }

    pub fn clear_selection(&mut self) {
        for slot in &mut self.slots {
            slot.selected = false;
        }
    }

    /// Marks a slot booked after the directory acknowledged it.
    pub fn mark_booked(&mut self, slot_id: &SlotId) {
        match self.slots.iter_mut().find(|slot| &slot.id == slot_id) {
            Some(slot) => {
                slot.booked = true;
                slot.selected = false;
            }
            None => debug!("mark_booked on unknown slot {} ignored", slot_id),
        }
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.selected)
    }

    pub fn has_selection(&self) -> bool {
        self.selected_slot().is_some()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, slot_id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| &slot.id == slot_id)
    }

    pub fn booked_ids(&self) -> Vec<&SlotId> {
        self.slots
            .iter()
            .filter(|slot| slot.booked)
            .map(|slot| &slot.id)
            .collect()
    }

    /// The sequence as it should be rendered under `policy`.
    pub fn visible_slots(&self, policy: OnBooked) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|slot| policy == OnBooked::MarkImmutable || !slot.booked)
            .collect()
    }
}
