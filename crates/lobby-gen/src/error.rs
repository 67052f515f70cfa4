//! Generation error types.

/// Errors reported by the generator entry points.
///
/// Undersized slices are not represented here: they trip the slice bounds
/// check and panic like any other out-of-range index.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A C-ABI export received a null buffer together with a positive count.
    #[error("{export}: null buffer with a positive count")]
    NullBuffer {
        /// Name of the export that rejected the call.
        export: &'static str,
    },

    /// A C-ABI export received a count whose buffer length overflows `usize`.
    #[error("{export}: count {count} overflows the buffer length")]
    CountOverflow {
        /// Name of the export that rejected the call.
        export: &'static str,
        /// The requested element count.
        count: usize,
    },

    /// An RNG algorithm name did not match any known generator.
    #[error("unknown rng algorithm: {0:?} (expected \"libc\" or \"chacha8\")")]
    UnknownRngAlgorithm(String),
}
