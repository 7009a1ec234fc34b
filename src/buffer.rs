use std::{fmt, iter, marker::PhantomData, mem, ops, ptr, ptr::NonNull};

/// Exclusive owner of zero or one heap block of `T` slots.
///
/// The buffer knows nothing about which slots are "in use": every slot of an
/// allocated block holds a valid `T` from the moment [`Buffer::allocate`]
/// returns until the block is freed. The slot count travels inside the fat
/// handle, so the buffer itself is a single (wide) pointer.
///
/// ```text
///   Buffer { raw: None }            Buffer { raw: Some(ptr, 4) }
///   ┌──────┐                        ┌──────┐     ┌────┬────┬────┬────┐
///   │ null │                        │ ptr ─┼────▶│ T0 │ T1 │ T2 │ T3 │
///   └──────┘                        └──────┘     └────┴────┴────┴────┘
/// ```
///
/// Copying is not possible. Ownership moves with the value, through
/// [`Buffer::release`] or through [`Buffer::swap`].
pub struct Buffer<T> {
  raw: Option<NonNull<[T]>>,
  _owns: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its block, so it is exactly as thread-safe as a Box<[T]>.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: shared access only ever hands out shared references to the elements.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Buffer<T> {
  /// Creates a buffer that owns nothing.
  pub const fn new() -> Self {
    Self {
      raw: None,
      _owns: PhantomData,
    }
  }

  /// Allocates `slots` default-constructed elements.
  ///
  /// Zero slots yields the empty buffer; no allocation is performed.
  pub fn allocate(slots: usize) -> Self
  where
    T: Default,
  {
    iter::repeat_with(T::default).take(slots).collect()
  }

  /// Takes ownership of a block previously detached with [`Buffer::release`].
  ///
  /// # Safety
  ///
  /// `raw` must have come out of [`Buffer::release`] (or an equivalent
  /// `Box<[T]>`) and must not be owned by anything else.
  pub unsafe fn from_raw(raw: NonNull<[T]>) -> Self {
    Self {
      raw: Some(raw),
      _owns: PhantomData,
    }
  }

  /// Detaches the owned block and hands it to the caller, leaving the buffer empty.
  ///
  /// The caller becomes responsible for freeing the block, typically by
  /// passing it back to [`Buffer::from_raw`].
  #[must_use = "dropping the released handle leaks the block"]
  pub fn release(&mut self) -> Option<NonNull<[T]>> {
    self.raw.take()
  }

  /// Forgets the owned block without freeing it.
  ///
  /// Only meant for the moment right after some other holder has taken a
  /// shallow copy of the handle (see [`Buffer::get`]) and become its owner.
  /// Calling it in any other situation leaks the block.
  pub fn clear(&mut self) {
    self.raw = None;
  }

  /// Returns a pointer to the first slot, or null when nothing is allocated.
  ///
  /// The pointer is a shallow copy: the buffer still owns the block.
  pub fn get(&self) -> *mut T {
    self
      .raw
      .map_or(ptr::null_mut(), |raw| raw.cast::<T>().as_ptr())
  }

  /// Whether the buffer currently owns a block.
  pub fn is_allocated(&self) -> bool {
    self.raw.is_some()
  }

  /// Number of slots in the owned block, zero when empty.
  pub fn slots(&self) -> usize {
    self.raw.map_or(0, |raw| raw.len())
  }

  pub fn as_slice(&self) -> &[T] {
    match self.raw {
      // SAFETY: the block is owned by us and every slot is initialized.
      Some(raw) => unsafe { raw.as_ref() },
      None => &[],
    }
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    match self.raw {
      // SAFETY: as above, and `&mut self` guarantees exclusive access.
      Some(mut raw) => unsafe { raw.as_mut() },
      None => &mut [],
    }
  }

  /// Returns the element at `index` without a bounds check.
  ///
  /// # Safety
  ///
  /// `index` must be less than [`Buffer::slots`].
  pub unsafe fn get_unchecked(
    &self,
    index: usize,
  ) -> &T {
    debug_assert!(
      index < self.slots(),
      "slot {index} is outside a buffer of {} slots",
      self.slots()
    );

    unsafe { &*self.get().add(index) }
  }

  /// Mutable counterpart of [`Buffer::get_unchecked`].
  ///
  /// # Safety
  ///
  /// `index` must be less than [`Buffer::slots`].
  pub unsafe fn get_unchecked_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    debug_assert!(
      index < self.slots(),
      "slot {index} is outside a buffer of {} slots",
      self.slots()
    );

    unsafe { &mut *self.get().add(index) }
  }

  /// Consumes the buffer, handing every slot over to a `Vec`.
  pub fn into_vec(mut self) -> Vec<T> {
    match self.release() {
      // SAFETY: released handles come from a leaked Box<[T]> that nothing else owns.
      Some(raw) => unsafe { Box::from_raw(raw.as_ptr()) }.into_vec(),
      None => Vec::new(),
    }
  }

  /// Exchanges the owned blocks of two buffers. Never allocates.
  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    mem::swap(&mut self.raw, &mut other.raw);
  }
}

impl<T> Default for Buffer<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Allocates exactly as many slots as the iterator yields.
impl<T> FromIterator<T> for Buffer<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let block: Box<[T]> = iter.into_iter().collect();

    if block.is_empty() {
      return Self::new();
    }

    Self {
      raw: Some(NonNull::from(Box::leak(block))),
      _owns: PhantomData,
    }
  }
}

impl<T> Drop for Buffer<T> {
  fn drop(&mut self) {
    if let Some(raw) = self.raw.take() {
      // SAFETY: the handle came from a leaked Box<[T]> and we are its only owner.
      drop(unsafe { Box::from_raw(raw.as_ptr()) });
    }
  }
}

impl<T> ops::Index<usize> for Buffer<T> {
  type Output = T;

  fn index(
    &self,
    index: usize,
  ) -> &T {
    &self.as_slice()[index]
  }
}

impl<T> ops::IndexMut<usize> for Buffer<T> {
  fn index_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    &mut self.as_mut_slice()[index]
  }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}
