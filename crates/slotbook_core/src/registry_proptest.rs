// --- File: crates/slotbook_core/src/registry_proptest.rs ---
use crate::registry::SlotRegistry;
use proptest::prelude::*;
use slotbook_common::SlotId;

#[derive(Debug, Clone)]
enum Op {
    Toggle(u8),
    Book(Vec<u8>),
    Mark(u8),
    Clear,
}

// Ids 1..=6 are the standard slots, 7 and 8 are unknown to the registry.
fn slot_id(n: u8) -> SlotId {
    SlotId::new(n.to_string())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1u8..=8).prop_map(Op::Toggle),
        1 => prop::collection::vec(1u8..=8, 0..6).prop_map(Op::Book),
        1 => (1u8..=8).prop_map(Op::Mark),
        1 => Just(Op::Clear),
    ]
}

fn apply(registry: &mut SlotRegistry, op: &Op) {
    match op {
        Op::Toggle(n) => {
            registry.toggle_selection(&slot_id(*n));
        }
        Op::Book(ids) => {
            let ids: Vec<SlotId> = ids.iter().copied().map(slot_id).collect();
            registry.apply_booked_set(&ids);
        }
        Op::Mark(n) => registry.mark_booked(&slot_id(*n)),
        Op::Clear => registry.clear_selection(),
    }
}

proptest! {
    #[test]
    fn selection_stays_exclusive_and_never_booked(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut registry = SlotRegistry::standard();
        for op in &ops {
            apply(&mut registry, op);
            let selected = registry.slots().iter().filter(|slot| slot.is_selected()).count();
            prop_assert!(selected <= 1);
            prop_assert!(registry.slots().iter().all(|slot| !(slot.is_selected() && slot.is_booked())));
        }
    }

    #[test]
    fn booked_flags_match_applied_set(
        ops in prop::collection::vec(op_strategy(), 0..20),
        booked in prop::collection::hash_set(1u8..=8, 0..8),
    ) {
        let mut registry = SlotRegistry::standard();
        for op in &ops {
            apply(&mut registry, op);
        }
        let ids: Vec<SlotId> = booked.iter().copied().map(slot_id).collect();
        registry.apply_booked_set(&ids);

        for slot in registry.slots() {
            prop_assert_eq!(slot.is_booked(), ids.contains(slot.id()));
            if slot.is_booked() {
                prop_assert!(!slot.is_selected());
            }
        }
    }

    #[test]
    fn toggle_on_booked_slot_changes_nothing(
        ops in prop::collection::vec(op_strategy(), 0..20),
        target in 1u8..=6,
    ) {
        let mut registry = SlotRegistry::standard();
        for op in &ops {
            apply(&mut registry, op);
        }
        registry.mark_booked(&slot_id(target));
        let before = registry.clone();
        registry.toggle_selection(&slot_id(target));
        prop_assert_eq!(registry, before);
    }
}
