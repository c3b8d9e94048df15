//! Diagnostic events.
//!
//! Events are emitted through `tracing` when the `tracing` feature is
//! enabled and compile to nothing otherwise.

/// Emits a `tracing` event at the given level.
///
/// ```ignore
/// trace_event!(debug, generator = "cycle", "source was empty");
/// ```
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($argument)+);
        }
    };
}

pub(crate) use trace_event;
