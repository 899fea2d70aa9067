#![cfg(not(feature = "tracking"))]

use std::sync::atomic::{AtomicI32, Ordering};

use static_locals::{LookupError, Registry};

fn counter() -> i32 {
    static COUNTER: AtomicI32 = AtomicI32::new(1);
    static_locals::track!(COUNTER);
    COUNTER.load(Ordering::SeqCst)
}

#[test]
fn track_leaves_the_global_registry_untouched() {
    counter();
    assert!(Registry::global().is_empty());
    assert!(static_locals::get_named::<AtomicI32>("COUNTER").is_none());
    assert!(matches!(
        static_locals::try_get_named::<AtomicI32>("COUNTER"),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
#[should_panic(expected = "without the `tracking` feature")]
fn get_ref_explains_that_tracking_is_off() {
    counter();
    let _ = static_locals::get_ref!(AtomicI32, COUNTER);
}

#[test]
fn explicit_registries_still_work() {
    static DEPTH: AtomicI32 = AtomicI32::new(4);
    let registry = Registry::new();
    static_locals::track!(in registry, DEPTH);
    assert_eq!(
        registry
            .get_named::<AtomicI32>("DEPTH")
            .map(|d| d.load(Ordering::SeqCst)),
        Some(4)
    );
}
