use std::ops;

/// A slot position inside a [`SimpleVector`][crate::SimpleVector].
///
/// Positions are plain slot indices. They are produced by
/// [`begin`][crate::SimpleVector::begin], [`end`][crate::SimpleVector::end],
/// [`insert`][crate::SimpleVector::insert] and
/// [`erase`][crate::SimpleVector::erase], and can be moved with `+` and `-`.
///
/// A position only names the slot it was computed for while the vector is
/// left alone. After any operation that shifts elements or changes capacity
/// it must be treated as stale: it still names a slot index, but not
/// necessarily the element it used to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
  pub const fn new(index: usize) -> Self {
    Self(index)
  }

  /// Slot index this position refers to.
  pub const fn index(self) -> usize {
    self.0
  }
}

impl ops::Add<usize> for Position {
  type Output = Self;

  fn add(
    self,
    offset: usize,
  ) -> Self {
    Self(self.0 + offset)
  }
}

impl ops::AddAssign<usize> for Position {
  fn add_assign(
    &mut self,
    offset: usize,
  ) {
    self.0 += offset;
  }
}

impl ops::Sub<usize> for Position {
  type Output = Self;

  fn sub(
    self,
    offset: usize,
  ) -> Self {
    Self(self.0 - offset)
  }
}

impl ops::Sub for Position {
  type Output = usize;

  /// Distance between two positions.
  fn sub(
    self,
    other: Self,
  ) -> usize {
    self.0 - other.0
  }
}
