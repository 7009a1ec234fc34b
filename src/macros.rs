/// Builds a [`SimpleVector`][crate::SimpleVector] the way `vec!` builds a `Vec`.
///
/// # Examples
///
/// ```rust
/// use rvector::simple_vector;
///
/// let empty: rvector::SimpleVector<u8> = simple_vector![];
/// assert!(empty.is_empty());
///
/// let listed = simple_vector![1, 2, 3];
/// assert_eq!(listed.capacity(), 3);
///
/// let filled = simple_vector!['x'; 4];
/// assert_eq!(filled, ['x', 'x', 'x', 'x']);
/// ```
#[macro_export]
macro_rules! simple_vector {
  () => {
    $crate::SimpleVector::new()
  };
  ($value:expr; $size:expr) => {
    $crate::SimpleVector::from_elem($size, $value)
  };
  ($($value:expr),+ $(,)?) => {
    $crate::SimpleVector::from([$($value),+])
  };
}
