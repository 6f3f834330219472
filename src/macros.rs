/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
/// Expands to nothing otherwise.
macro_rules! trace_delta {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}
