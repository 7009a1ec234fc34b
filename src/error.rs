use thiserror::Error;

/// Failures reported by checked access on a [`SimpleVector`][crate::SimpleVector].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// The requested slot does not exist. Checked access compares against the
  /// capacity, so this only fires for `index >= capacity`.
  #[error("index {index} is out of range for capacity {capacity}")]
  OutOfRange {
    /// The index the caller asked for.
    index: usize,

    /// Slot count of the vector at the time of the call.
    capacity: usize,
  },
}

/// Result alias for fallible vector operations.
pub type Result<T> = std::result::Result<T, Error>;
