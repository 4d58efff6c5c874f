use rattendance::core::confirm::ConfirmSlot;
use rattendance::errors::AppError;
use std::cell::Cell;

#[test]
fn accept_runs_pending_action_once() {
    let runs = Cell::new(0);
    let mut slot = ConfirmSlot::new();
    slot.request_confirm("Delete", "Delete it?", || {
        runs.set(runs.get() + 1);
        Ok(())
    });

    assert!(slot.is_pending());
    assert_eq!(slot.dialog(), Some(("Delete", "Delete it?")));
    assert!(slot.accept().unwrap());
    assert!(!slot.is_pending());
    assert!(!slot.accept().unwrap());
    assert_eq!(runs.get(), 1);
}

#[test]
fn cancel_drops_action_without_running() {
    let ran = Cell::new(false);
    let mut slot = ConfirmSlot::new();
    slot.request_confirm("Flush", "Flush?", || {
        ran.set(true);
        Ok(())
    });

    assert!(slot.cancel());
    assert!(!slot.cancel());
    assert!(!slot.accept().unwrap());
    assert!(!ran.get());
}

#[test]
fn newer_request_replaces_pending_one() {
    let first = Cell::new(false);
    let second = Cell::new(false);
    let mut slot = ConfirmSlot::new();

    slot.request_confirm("First", "one", || {
        first.set(true);
        Ok(())
    });
    slot.request_confirm("Second", "two", || {
        second.set(true);
        Ok(())
    });

    assert_eq!(slot.dialog(), Some(("Second", "two")));
    slot.accept().unwrap();
    assert!(!first.get());
    assert!(second.get());
}

#[test]
fn resolve_with_follows_the_answer() {
    let ran = Cell::new(false);
    let mut slot = ConfirmSlot::new();
    slot.request_confirm("Promote", "Promote all?", || {
        ran.set(true);
        Ok(())
    });
    assert!(!slot.resolve_with(|_, _| Ok(false)).unwrap());
    assert!(!ran.get());
    assert!(!slot.is_pending());

    slot.request_confirm("Promote", "Promote all?", || {
        ran.set(true);
        Ok(())
    });
    let mut seen = String::new();
    assert!(
        slot.resolve_with(|title, _| {
            seen = title.to_string();
            Ok(true)
        })
        .unwrap()
    );
    assert!(ran.get());
    assert_eq!(seen, "Promote");
}

#[test]
fn action_error_is_propagated_and_slot_cleared() {
    let mut slot = ConfirmSlot::new();
    slot.request_confirm("Delete", "Delete?", || {
        Err(AppError::Conflict("still referenced".into()))
    });

    assert!(matches!(slot.accept(), Err(AppError::Conflict(_))));
    assert!(!slot.is_pending());
}
