use std::{cmp::Ordering, fmt, hash, iter, mem, ops, slice, vec};

use tracing::trace;

use crate::{
  buffer::Buffer,
  error::{Error, Result},
  growth,
  position::Position,
  reserve::ReserveHint,
};

/// A growable, contiguous sequence of `T` on top of a [`Buffer`].
///
/// ```text
///   size = 3, capacity = 6
///
///   ┌────┬────┬────┬────┬────┬────┐
///   │ 10 │ 15 │ 20 │  0 │  0 │  0 │
///   └────┴────┴────┴────┴────┴────┘
///   ◀──── active ──▶◀── spare ─────▶
/// ```
///
/// Every allocated slot holds a valid `T`. Slots in `[size, capacity)` start
/// out default-constructed and may later hold leftovers from `pop_back`,
/// `erase`, `clear` or a shrinking `resize`; checked access through
/// [`SimpleVector::at`] can reach them.
pub struct SimpleVector<T> {
  storage: Buffer<T>,
  size: usize,
  capacity: usize,
}

impl<T> SimpleVector<T> {
  /// Creates an empty vector. Nothing is allocated.
  pub const fn new() -> Self {
    Self {
      storage: Buffer::new(),
      size: 0,
      capacity: 0,
    }
  }

  /// Builds a vector holding `size` copies of `value`.
  ///
  /// All slots but the last receive a clone; the last one receives `value`
  /// itself. `size` and capacity are both `size`.
  pub fn from_elem(
    size: usize,
    value: T,
  ) -> Self
  where
    T: Clone,
  {
    iter::repeat_n(value, size).collect()
  }

  /// Number of active elements.
  pub fn len(&self) -> usize {
    self.size
  }

  /// Number of allocated slots.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  pub fn as_slice(&self) -> &[T] {
    &self.storage.as_slice()[..self.size]
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.storage.as_mut_slice()[..self.size]
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }

  /// Position of the first element.
  pub fn begin(&self) -> Position {
    Position::new(0)
  }

  /// Position one past the last active element.
  pub fn end(&self) -> Position {
    Position::new(self.size)
  }

  /// Checked access to the slot at `index`.
  ///
  /// The check is against the capacity, not the size: spare slots in
  /// `[size, capacity)` are reachable and hold whatever the slot currently
  /// contains.
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] when `index >= capacity`.
  pub fn at(
    &self,
    index: usize,
  ) -> Result<&T> {
    let capacity = self.capacity;

    self
      .storage
      .as_slice()
      .get(index)
      .ok_or(Error::OutOfRange { index, capacity })
  }

  /// Mutable counterpart of [`SimpleVector::at`].
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] when `index >= capacity`.
  pub fn at_mut(
    &mut self,
    index: usize,
  ) -> Result<&mut T> {
    let capacity = self.capacity;

    self
      .storage
      .as_mut_slice()
      .get_mut(index)
      .ok_or(Error::OutOfRange { index, capacity })
  }

  /// Access without any bounds check.
  ///
  /// # Safety
  ///
  /// `index` must be less than [`SimpleVector::capacity`].
  pub unsafe fn get_unchecked(
    &self,
    index: usize,
  ) -> &T {
    unsafe { self.storage.get_unchecked(index) }
  }

  /// Mutable counterpart of [`SimpleVector::get_unchecked`].
  ///
  /// # Safety
  ///
  /// `index` must be less than [`SimpleVector::capacity`].
  pub unsafe fn get_unchecked_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    unsafe { self.storage.get_unchecked_mut(index) }
  }

  /// Forgets every element. Capacity and slot contents are left as they are.
  pub fn clear(&mut self) {
    self.size = 0;
  }

  /// Drops the last element from the active range. Does nothing when empty.
  pub fn pop_back(&mut self) {
    if self.size > 0 {
      self.size -= 1;
    }
  }

  /// Removes the element at `position`, shifting everything after it one slot left.
  ///
  /// Returns the position that now holds the element which followed the
  /// erased one (equal to [`SimpleVector::end`] if the last element was erased).
  /// The erased value is parked in the first spare slot.
  ///
  /// # Panics
  ///
  /// `position` must lie in `[begin, end)`. Anything else is a caller bug:
  /// debug builds report it through an assertion, release builds still panic
  /// rather than touch memory outside the vector.
  pub fn erase(
    &mut self,
    position: Position,
  ) -> Position {
    let index = position.index();
    debug_assert!(
      index < self.size,
      "erase position {index} is outside [0, {})",
      self.size
    );

    self.storage.as_mut_slice()[index..self.size].rotate_left(1);
    self.size -= 1;

    position
  }

  /// Exchanges contents with `other` in O(1).
  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    self.storage.swap(&mut other.storage);
    mem::swap(&mut self.size, &mut other.size);
    mem::swap(&mut self.capacity, &mut other.capacity);
  }

  /// Move-assignment from `source`.
  ///
  /// An empty `source` resets `self` to an empty, unallocated vector. Any
  /// other `source` is swapped with `self`, so `source` ends up holding what
  /// `self` held before, rather than being left empty.
  pub fn move_assign(
    &mut self,
    source: &mut Self,
  ) {
    if source.is_empty() {
      self.reset();
      return;
    }

    self.swap(source);
  }

  /// Consumes the vector, returning its active elements.
  pub fn into_vec(mut self) -> Vec<T> {
    let mut elements = mem::take(&mut self.storage).into_vec();
    elements.truncate(self.size);
    elements
  }

  /// Consumes the vector and leaks its block, returning the active elements.
  ///
  /// Spare slots are never dropped.
  pub fn leak<'a>(mut self) -> &'a mut [T] {
    let head = self.storage.get();
    let size = self.size;

    // The returned slice owns the block from here on.
    self.storage.clear();

    if head.is_null() {
      return <&mut [T]>::default();
    }

    // SAFETY: the block is no longer owned by any buffer, and its first `size` slots are valid.
    unsafe { slice::from_raw_parts_mut(head, size) }
  }

  fn reset(&mut self) {
    trace!(
      capacity = self.capacity,
      size = self.size,
      "resetting vector to empty"
    );

    self.storage = Buffer::new();
    self.size = 0;
    self.capacity = 0;
  }
}

impl<T: Default> SimpleVector<T> {
  /// Builds a vector of `size` default values. `size` and capacity are both `size`.
  pub fn with_len(size: usize) -> Self {
    Self {
      storage: Buffer::allocate(size),
      size,
      capacity: size,
    }
  }

  /// Builds an empty vector with `capacity` slots reserved.
  pub fn with_capacity(capacity: usize) -> Self {
    let mut vector = Self::new();
    vector.reserve(capacity);
    vector
  }

  /// Builds an empty vector sized by a [`ReserveHint`].
  pub fn with_reserve(hint: ReserveHint) -> Self {
    Self::with_capacity(hint.capacity())
  }

  /// Changes the number of active elements.
  ///
  /// Shrinking only moves the end marker. Growing within capacity
  /// default-constructs the newly exposed slots. Growing past capacity
  /// reallocates to `max(capacity * 2, new_size * 2)` slots first.
  pub fn resize(
    &mut self,
    new_size: usize,
  ) {
    if new_size <= self.size {
      self.size = new_size;
      return;
    }

    if new_size <= self.capacity {
      for slot in &mut self.storage.as_mut_slice()[self.size..new_size] {
        *slot = T::default();
      }
    } else {
      self.resize_capacity(growth::resized_capacity(self.capacity, new_size));
    }

    self.size = new_size;
  }

  /// Appends `value`, doubling capacity when full (or allocating one slot when empty).
  pub fn push_back(
    &mut self,
    value: T,
  ) {
    if self.size == self.capacity {
      self.resize_capacity(growth::grown_capacity(self.capacity));
    }

    self.storage[self.size] = value;
    self.size += 1;
  }

  /// Inserts `value` at `position`, shifting the elements from there on one slot right.
  ///
  /// `position` may equal [`SimpleVector::end`], which appends. Returns the
  /// position of the inserted element. Positions taken before the call are
  /// stale afterwards.
  ///
  /// # Panics
  ///
  /// `position` must lie in `[begin, end]`. Debug builds report a violation
  /// through an assertion, release builds still panic on it.
  pub fn insert(
    &mut self,
    position: Position,
    value: T,
  ) -> Position {
    let index = position.index();
    debug_assert!(
      index <= self.size,
      "insert position {index} is outside [0, {}]",
      self.size
    );

    if self.size == self.capacity {
      self.resize_capacity(growth::grown_capacity(self.capacity));
    }

    let slots = self.storage.as_mut_slice();
    slots[index..=self.size].rotate_right(1);
    slots[index] = value;
    self.size += 1;

    position
  }

  /// Grows capacity to `new_capacity` if it is currently smaller. Never shrinks.
  pub fn reserve(
    &mut self,
    new_capacity: usize,
  ) {
    if new_capacity > self.capacity {
      self.resize_capacity(new_capacity);
    }
  }

  /// Moves the active elements into a fresh block of `new_capacity` slots.
  ///
  /// All capacity growth goes through here. The remaining slots of the new
  /// block are default-constructed, and the old block is freed when the
  /// swapped-out buffer goes out of scope.
  fn resize_capacity(
    &mut self,
    new_capacity: usize,
  ) {
    debug_assert!(new_capacity >= self.size);

    trace!(
      old_capacity = self.capacity,
      new_capacity,
      size = self.size,
      "resizing vector storage"
    );

    let mut grown = Buffer::<T>::allocate(new_capacity);
    let active = self.size;
    grown.as_mut_slice()[..active].swap_with_slice(&mut self.storage.as_mut_slice()[..active]);

    self.storage.swap(&mut grown);
    self.capacity = new_capacity;
  }
}

impl<T> Default for SimpleVector<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Deep copy sized to the source: the clone's capacity equals its size.
impl<T: Clone> Clone for SimpleVector<T> {
  fn clone(&self) -> Self {
    self.iter().cloned().collect()
  }

  /// Copy-assignment. An empty `source` resets `self` to an empty,
  /// unallocated vector; otherwise `self` receives a fresh copy.
  fn clone_from(
    &mut self,
    source: &Self,
  ) {
    if source.is_empty() {
      self.reset();
      return;
    }

    let mut copy = source.clone();
    self.swap(&mut copy);
  }
}

impl<T> FromIterator<T> for SimpleVector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let storage: Buffer<T> = iter.into_iter().collect();
    let size = storage.slots();

    Self {
      storage,
      size,
      capacity: size,
    }
  }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
  fn extend<I: IntoIterator<Item = T>>(
    &mut self,
    iter: I,
  ) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
  fn from(elements: [T; N]) -> Self {
    elements.into_iter().collect()
  }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
  fn from(elements: &[T]) -> Self {
    elements.iter().cloned().collect()
  }
}

impl<T: Default> From<ReserveHint> for SimpleVector<T> {
  fn from(hint: ReserveHint) -> Self {
    Self::with_reserve(hint)
  }
}

/// Element access by index. Debug builds assert `index < len()`; every build
/// panics for `index >= capacity()`. Use [`SimpleVector::get_unchecked`] to
/// skip the check entirely.
impl<T> ops::Index<usize> for SimpleVector<T> {
  type Output = T;

  fn index(
    &self,
    index: usize,
  ) -> &T {
    debug_assert!(index < self.size, "index {index} is past the end ({})", self.size);
    &self.storage[index]
  }
}

impl<T> ops::IndexMut<usize> for SimpleVector<T> {
  fn index_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    debug_assert!(index < self.size, "index {index} is past the end ({})", self.size);
    &mut self.storage[index]
  }
}

impl<T> ops::Index<Position> for SimpleVector<T> {
  type Output = T;

  fn index(
    &self,
    position: Position,
  ) -> &T {
    &self[position.index()]
  }
}

impl<T> ops::IndexMut<Position> for SimpleVector<T> {
  fn index_mut(
    &mut self,
    position: Position,
  ) -> &mut T {
    &mut self[position.index()]
  }
}

impl<T> IntoIterator for SimpleVector<T> {
  type Item = T;
  type IntoIter = vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.into_vec().into_iter()
  }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
  fn eq(
    &self,
    other: &[T; N],
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

/// Lexicographic over the active elements; `>`, `<=` and `>=` follow from `<`.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
  fn partial_cmp(
    &self,
    other: &Self,
  ) -> Option<Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }
}

impl<T: Ord> Ord for SimpleVector<T> {
  fn cmp(
    &self,
    other: &Self,
  ) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: hash::Hash> hash::Hash for SimpleVector<T> {
  fn hash<H: hash::Hasher>(
    &self,
    state: &mut H,
  ) {
    self.as_slice().hash(state);
  }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}
