use outcome_core::Fatal;
use std::panic::{self, AssertUnwindSafe};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_test_writer()
        .try_init();
}

/// Runs `f`, expecting it to unwind through `value_or_panic`, and returns the
/// payload it raised.
///
/// The panic hook is process-wide, so callers must be `#[serial]`.
#[allow(dead_code)]
pub fn catch_fatal<T, E: 'static>(f: impl FnOnce() -> T) -> Fatal<E> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let caught = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    match caught {
        Ok(_) => panic!("expected value_or_panic to unwind"),
        Err(payload) => *payload
            .downcast::<Fatal<E>>()
            .unwrap_or_else(|_| panic!("panic payload is not a Fatal")),
    }
}
