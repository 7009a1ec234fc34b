//! # rvector - A Growable Vector Over a Hand-Managed Buffer
//!
//! This crate provides [`SimpleVector`], a minimal dynamic array with
//! amortized O(1) append, explicit capacity control and value semantics,
//! built on [`Buffer`], an exclusive-ownership handle to a heap block.
//!
//! ## Overview
//!
//! ```text
//!   SimpleVector<T>
//!   ┌──────────────────────┐
//!   │ size:     3          │
//!   │ capacity: 4          │
//!   │ storage:  Buffer<T> ─┼──┐
//!   └──────────────────────┘  │
//!                             ▼
//!                  ┌─────┬─────┬─────┬─────┐
//!                  │  A  │  B  │  C  │ def │   heap block, 4 slots
//!                  └─────┴─────┴─────┴─────┘
//!                  ◀──── active ────▶◀spare▶
//! ```
//!
//! Growing never reallocates in place. A new, larger block is allocated,
//! the active elements are moved across, and the buffers are swapped so the
//! old block is freed when the temporary goes out of scope:
//!
//! ```text
//!   before push(E), full:     ┌───┬───┬───┬───┐
//!                             │ A │ B │ C │ D │ capacity 4
//!                             └───┴───┴───┴───┘
//!
//!   after:                    ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!                             │ A │ B │ C │ D │ E │def│def│def│ capacity 8
//!                             └───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rvector
//!   ├── buffer    - Buffer: owns zero or one block of slots
//!   ├── growth    - capacity growth rules (internal)
//!   ├── macros    - simple_vector! construction macro
//!   ├── position  - Position handles used by insert/erase
//!   ├── reserve   - ReserveHint and reserve()
//!   ├── vector    - SimpleVector implementation
//!   └── error     - Error / Result for checked access
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rvector::{SimpleVector, simple_vector};
//!
//! let mut numbers = SimpleVector::new();
//! numbers.push_back(10);
//! numbers.push_back(20);
//! numbers.insert(numbers.begin() + 1, 15);
//! assert_eq!(numbers, [10, 15, 20]);
//!
//! numbers.erase(numbers.begin());
//! numbers.resize(5);
//! assert_eq!(numbers, simple_vector![15, 20, 0, 0, 0]);
//!
//! // Checked access reaches every allocated slot, not just the active ones.
//! assert!(numbers.at(numbers.capacity() - 1).is_ok());
//! assert!(numbers.at(numbers.capacity()).is_err());
//! ```
//!
//! ## Growth Policy
//!
//! - `push_back` / `insert` on a full vector: capacity `0 -> 1`, otherwise doubles.
//! - `resize` past capacity: `max(capacity * 2, new_size * 2)`.
//! - `reserve(n)`: exactly `n` when `n > capacity`, never shrinks.
//! - Clones are tight: capacity equals size.
//!
//! ## Assignment
//!
//! `clone_from` and [`SimpleVector::move_assign`] both reset the target to
//! an unallocated empty vector when the source is empty. A non-empty move
//! assignment swaps, so the source ends up with the target's old contents.
//!
//! ## Limitations
//!
//! - **Single-threaded value type**: no internal synchronization
//! - **`T: Default` for growth**: every allocated slot holds a valid value
//! - **Stale positions**: a [`Position`] only names its element until the
//!   next insert, erase or reallocation
//!
//! ## Safety
//!
//! The only unsafe entry points are [`Buffer::from_raw`] and the
//! `get_unchecked` accessors. Everything else is bounds-checked against the
//! allocated block, with `debug_assert!` catching use of positions and
//! indices past the active range in debug builds.

mod buffer;
mod error;
mod growth;
mod macros;
mod position;
mod reserve;
mod vector;

pub use buffer::Buffer;
pub use error::{Error, Result};
pub use position::Position;
pub use reserve::{ReserveHint, reserve};
pub use vector::SimpleVector;
