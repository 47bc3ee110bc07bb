use fixedpool::{HEADER_SIZE, PoolAllocator, PoolError};

/// Prints the pool's bookkeeping state with a label.
fn print_pool(
  label: &str,
  pool: &PoolAllocator,
) {
  println!(
    "[{}] capacity = {} B, blocks = {}, free = {} B",
    label,
    pool.size(),
    pool.block_count(),
    pool.free_bytes(),
  );
}

fn main() -> Result<(), PoolError> {
  // A small arena, the kind you would reserve statically on an MCU.
  let mut pool = PoolAllocator::new(256)?;
  print_pool("start", &pool);

  // --------------------------------------------------------------------
  // 1) Allocate 10 bytes. Sizes round up to the 4-byte unit, so the
  //    granted block holds 12 usable bytes.
  // --------------------------------------------------------------------
  let first = pool.allocate(10).expect("fresh pool has room");
  println!("\n[1] allocate(10) -> block of {} B", pool.block_size(Some(first)));
  print_pool("1", &pool);

  // Write something into the payload to show it's usable.
  pool.data_mut(first).fill(0xAB);
  println!("[1] payload filled with 0xAB, first byte = 0x{:02X}", pool.data(first)[0]);

  // --------------------------------------------------------------------
  // 2) Allocate a second block; it lands right behind the first one.
  // --------------------------------------------------------------------
  let second = pool.allocate(32).expect("fresh pool has room");
  println!("\n[2] allocate(32) -> block of {} B", pool.block_size(Some(second)));
  print_pool("2", &pool);

  // --------------------------------------------------------------------
  // 3) Free the first block, then allocate 8 bytes. First-fit reuses
  //    the freed low block instead of eating into trailing free space.
  // --------------------------------------------------------------------
  pool.deallocate(Some(first));
  print_pool("3 after free", &pool);

  let third = pool.allocate(8).expect("freed block is available");
  println!(
    "\n[3] allocate(8) reused the freed block? {}",
    if third == first { "yes, first-fit took the low block" } else { "no" }
  );
  println!("[3] granted {} B for an 8 B request (whole-block grant)", pool.block_size(Some(third)));

  // --------------------------------------------------------------------
  // 4) Grow the low block. It cannot expand in place past its neighbor,
  //    so the payload moves; the contents travel with it.
  // --------------------------------------------------------------------
  pool.data_mut(third).fill(0x77);
  let grown = pool.reallocate(Some(third), 64).expect("tail space is free");
  println!(
    "\n[4] reallocate(64) moved the block? {} (contents preserved: {})",
    if grown != third { "yes" } else { "no" },
    pool.data(grown)[..8].iter().all(|&b| b == 0x77),
  );
  print_pool("4", &pool);

  // --------------------------------------------------------------------
  // 5) Exhaust the pool. Allocation failure is a plain None; freeing
  //    anything makes room again.
  // --------------------------------------------------------------------
  let mut hoard = Vec::new();
  while let Some(handle) = pool.allocate(16) {
    hoard.push(handle);
  }
  println!("\n[5] grabbed {} more 16 B blocks, free = {} B", hoard.len(), pool.free_bytes());
  println!("[5] allocate(16) now -> {:?}", pool.allocate(16));

  pool.deallocate(hoard.pop());
  let refill = pool.allocate(16);
  println!("[5] after one free, allocate(16) succeeds again: {}", refill.is_some());

  // --------------------------------------------------------------------
  // 6) Free everything. Coalescing folds the arena back into a single
  //    spanning free block: capacity minus one header.
  // --------------------------------------------------------------------
  for handle in hoard {
    pool.deallocate(Some(handle));
  }
  pool.deallocate(refill);
  pool.deallocate(Some(grown));
  pool.deallocate(Some(second));
  print_pool("6 end", &pool);
  assert_eq!(pool.free_bytes(), pool.size() - HEADER_SIZE);

  Ok(())
}
