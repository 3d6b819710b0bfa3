//! Traversal event logging.
//!
//! Searches open a span per traversal and record each visited vertex, each
//! rejected vertex and each capacity error as an event.  With the `tracing`
//! feature these go through the `tracing` macros and `init_tracing` installs
//! a `fmt` subscriber for test output; without it the same names expand to
//! nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a `fmt` subscriber that writes every traversal event through
    /// the test harness's captured output.  Safe to call more than once.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, debug_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! debug_span {
        ($($arg:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug, debug_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
