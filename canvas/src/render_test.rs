use std::cell::Cell;

use super::*;

#[test]
fn restoring_runs_restore_after_success() {
    let restored = Cell::new(false);
    let result: Result<u8, &str> = restoring(|| Ok(7), || restored.set(true));
    assert_eq!(result, Ok(7));
    assert!(restored.get());
}

#[test]
fn restoring_runs_restore_when_body_fails() {
    let restored = Cell::new(false);
    let result: Result<(), &str> = restoring(|| Err("arc failed"), || restored.set(true));
    assert_eq!(result, Err("arc failed"));
    assert!(restored.get());
}

#[test]
fn restoring_runs_restore_after_body() {
    let order = Cell::new(0);
    let result: Result<(), ()> = restoring(
        || {
            assert_eq!(order.get(), 0);
            order.set(1);
            Ok(())
        },
        || {
            assert_eq!(order.get(), 1);
            order.set(2);
        },
    );
    assert!(result.is_ok());
    assert_eq!(order.get(), 2);
}
