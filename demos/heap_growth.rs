use std::io::Read;

use libc::sbrk;
use rvector::{SimpleVector, reserve};

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap`, `htop`,
/// `gdb`, or just watch how the vector's block moves as it grows.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints the current program break using `sbrk(0)`.
/// Small blocks come out of the heap below the break; large ones are usually mmapped.
fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { sbrk(0) },
  );
}

fn print_vector(
  label: &str,
  vector: &SimpleVector<u64>,
) {
  println!(
    "[{}] size = {}, capacity = {}, first slot = {:?}",
    label,
    vector.len(),
    vector.capacity(),
    vector.at(0).map(|slot| slot as *const u64).ok(),
  );
}

fn main() {
  print_program_break("start");
  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 1) Push one value at a time and watch capacity double.
  //    Every capacity change moves the elements to a new block.
  // --------------------------------------------------------------------
  let mut numbers = SimpleVector::new();
  println!("\n[1] push_back 0..9");
  for value in 0..9u64 {
    numbers.push_back(value);
    print_vector("1", &numbers);
  }

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 2) Resize past capacity. Growth overshoots to twice the new size.
  // --------------------------------------------------------------------
  numbers.resize(20);
  println!("\n[2] resize(20)");
  print_vector("2", &numbers);
  println!("[2] slot 39 via at() = {:?}", numbers.at(39));
  println!("[2] slot 40 via at() = {:?}", numbers.at(40));

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 3) Reserve up front, then fill without a single reallocation.
  // --------------------------------------------------------------------
  let mut reserved: SimpleVector<u64> = SimpleVector::from(reserve(16));
  println!("\n[3] SimpleVector::from(reserve(16))");
  print_vector("3", &reserved);
  for value in 0..16 {
    reserved.push_back(value);
  }
  print_vector("3", &reserved);

  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 4) Allocate a large block to observe heap growth.
  // --------------------------------------------------------------------
  print_program_break("before large reserve");

  // 64 KiB of u64 slots.
  reserved.reserve(8 * 1024);
  println!("\n[4] reserve(8192)");
  print_vector("4", &reserved);

  print_program_break("after large reserve");
  block_until_enter_pressed();

  // --------------------------------------------------------------------
  // 5) Clearing keeps the block; dropping frees it.
  // --------------------------------------------------------------------
  reserved.clear();
  println!("\n[5] clear()");
  print_vector("5", &reserved);

  drop(reserved);
  drop(numbers);
  print_program_break("after drop");

  println!("\n[6] End of example.");
}
