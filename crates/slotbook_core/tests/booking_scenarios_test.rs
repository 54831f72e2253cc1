use mockall::predicate::eq;
use slotbook_common::{DirectoryError, SlotId};
use slotbook_core::{BookingError, ValidationError};

use fixtures::{accept, booking, flags, scenario_date, synchronizer, MockDirectory};

fn slot(id: &str) -> SlotId {
    SlotId::new(id)
}

#[tokio::test]
async fn test_date_selection_marks_remote_bookings() {
    let mut directory = MockDirectory::new();
    directory
        .expect_list_bookings()
        .with(eq(scenario_date()))
        .times(1)
        .returning(|date| Ok(vec![booking(date, "2")]));
    let mut sync = synchronizer(directory);

    sync.on_date_selected(Some(scenario_date())).await.unwrap();

    assert_eq!(flags(&sync, "2"), (false, true));
    for other in ["1", "3", "4", "5", "6"] {
        assert_eq!(flags(&sync, other), (false, false), "slot {other}");
    }
}

#[tokio::test]
async fn test_clicking_free_slots_moves_selection() {
    let mut sync = synchronizer(MockDirectory::new());

    sync.toggle_slot(&slot("1"));
    assert_eq!(flags(&sync, "1"), (true, false));

    sync.toggle_slot(&slot("3"));
    assert_eq!(flags(&sync, "1"), (false, false));
    assert_eq!(flags(&sync, "3"), (true, false));
}

#[tokio::test]
async fn test_successful_commit_books_slot_once() {
    let mut directory = MockDirectory::new();
    directory.expect_list_bookings().returning(|_| Ok(vec![]));
    directory
        .expect_create_booking()
        .times(1)
        .returning(|request| Ok(accept(request)));
    let mut sync = synchronizer(directory);

    sync.on_date_selected(Some(scenario_date())).await.unwrap();
    sync.toggle_slot(&slot("4"));
    let confirmation = sync.commit_booking().await.unwrap();

    assert_eq!(confirmation.time_label, "5:00 PM");
    assert_eq!(flags(&sync, "4"), (false, true));

    let again = sync.commit_booking().await.unwrap_err();
    assert_eq!(again, BookingError::Validation(ValidationError::NoSlotSelected));
}

#[tokio::test]
async fn test_failed_commit_keeps_selection_for_retry() {
    let mut directory = MockDirectory::new();
    directory.expect_list_bookings().returning(|_| Ok(vec![]));
    let mut attempts = 0;
    directory
        .expect_create_booking()
        .times(2)
        .returning(move |request| {
            attempts += 1;
            if attempts == 1 {
                Err(DirectoryError::Unavailable("503 Service Unavailable".into()))
            } else {
                Ok(accept(request))
            }
        });
    let mut sync = synchronizer(directory);

    sync.on_date_selected(Some(scenario_date())).await.unwrap();
    sync.toggle_slot(&slot("5"));

    let err = sync.commit_booking().await.unwrap_err();
    assert!(matches!(err, BookingError::Commit(ref commit) if !commit.is_conflict()));
    assert_eq!(flags(&sync, "5"), (true, false));

    sync.commit_booking().await.unwrap();
    assert_eq!(flags(&sync, "5"), (false, true));
}
