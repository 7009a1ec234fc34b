//! Capacity growth rules.
//!
//! ```text
//!   push / insert on a full vector     resize past capacity
//!
//!   capacity 0  ──▶ 1                   max(capacity * 2, new_size * 2)
//!   capacity n  ──▶ 2n
//! ```

/// Capacity to grow to when a single slot is needed and the vector is full.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
  if capacity == 0 {
    return 1;
  }

  doubled(capacity)
}

/// Capacity to grow to when `resize` asks for more slots than are allocated.
///
/// Deliberately over-allocates past the requested size.
pub(crate) fn resized_capacity(
  capacity: usize,
  new_size: usize,
) -> usize {
  doubled(capacity).max(doubled(new_size))
}

fn doubled(value: usize) -> usize {
  match value.checked_mul(2) {
    Some(doubled) => doubled,
    None => capacity_overflow(),
  }
}

#[cold]
fn capacity_overflow() -> ! {
  panic!("capacity overflow")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_grown_capacity() {
    let expected = [(0, 1), (1, 2), (2, 4), (3, 6), (4, 8), (100, 200)];

    for (capacity, grown) in expected {
      assert_eq!(grown, grown_capacity(capacity));
    }
  }

  #[test]
  fn test_resized_capacity_doubles_past_request() {
    assert_eq!(resized_capacity(0, 5), 10);
    assert_eq!(resized_capacity(4, 5), 10);
    assert_eq!(resized_capacity(3, 4), 8);
    assert_eq!(resized_capacity(10, 11), 22);
  }

  #[test]
  fn test_resized_capacity_covers_request() {
    for capacity in 0..32 {
      for new_size in (capacity + 1)..64 {
        assert!(resized_capacity(capacity, new_size) >= new_size);
      }
    }
  }

  #[test]
  #[should_panic(expected = "capacity overflow")]
  fn test_overflow_panics() {
    grown_capacity(usize::MAX);
  }
}
