/// A capacity request, used to build an empty vector with room reserved up front.
///
/// ```rust
/// use rvector::{SimpleVector, reserve};
///
/// let numbers: SimpleVector<u32> = SimpleVector::from(reserve(8));
///
/// assert!(numbers.is_empty());
/// assert_eq!(numbers.capacity(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveHint {
  capacity: usize,
}

impl ReserveHint {
  pub const fn new(capacity: usize) -> Self {
    Self { capacity }
  }

  /// The capacity the hint asks for.
  pub const fn capacity(&self) -> usize {
    self.capacity
  }
}

/// Shorthand for [`ReserveHint::new`].
pub const fn reserve(capacity: usize) -> ReserveHint {
  ReserveHint::new(capacity)
}
