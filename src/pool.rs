use log::{debug, trace};

use crate::align;
use crate::block::{Block, HEADER_SIZE, Handle};
#[cfg(test)]
use crate::block::ALIGNMENT;
use crate::error::PoolError;

/// Fixed-capacity pool allocator over a single contiguous byte arena.
///
/// The arena is carved into variable-size blocks threaded into a circular
/// doubly-linked list in arena address order. Allocation is first-fit:
/// the list is walked from the head block (lowest arena address) and the
/// first free block large enough is granted, split when the remainder can
/// host its own header. Freed blocks coalesce immediately with physically
/// adjacent free neighbors, so no two arena-adjacent blocks are ever both
/// free.
///
/// The allocator is strictly single-threaded: every operation takes
/// `&mut self` and runs to completion. If several execution contexts must
/// share one instance, the caller has to wrap it in external mutual
/// exclusion (e.g. a `Mutex`), including the read-only queries.
pub struct PoolAllocator {
  arena: Box<[u8]>,
  blocks: Vec<Block>,
  spare: Vec<usize>,
  head: usize,
}

impl PoolAllocator {
  /// Creates an allocator owning a zeroed arena of `capacity` bytes.
  ///
  /// A single free block spanning `capacity - HEADER_SIZE` bytes is
  /// installed and linked to itself. The minimum viable capacity is
  /// [`HEADER_SIZE`]: one header with a zero-byte payload.
  pub fn new(capacity: usize) -> Result<Self, PoolError> {
    if capacity < HEADER_SIZE {
      return Err(PoolError::CapacityTooSmall { capacity });
    }

    let head = Block::new(0, capacity - HEADER_SIZE, true, 0, 0);

    Ok(Self {
      arena: vec![0u8; capacity].into_boxed_slice(),
      blocks: vec![head],
      spare: Vec::new(),
      head: 0,
    })
  }

  /// Allocates a block with at least `size` usable bytes.
  ///
  /// The size is rounded up to the next multiple of [`ALIGNMENT`]. Returns
  /// `None` when no free block is large enough, either because the arena is
  /// exhausted or because the free space is fragmented; the two are not
  /// distinguished.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Option<Handle> {
    // No block can ever reach the full arena size, and rejecting here
    // keeps the rounding below from overflowing.
    if size > self.size() {
      debug!("allocate({size}) failed: larger than the arena");
      return None;
    }
    let size = align!(size);

    let mut current = self.head;
    loop {
      let block = self.blocks[current];

      if block.free && block.size >= size {
        if block.size > size + HEADER_SIZE {
          self.split(current, size);
        }
        self.blocks[current].free = false;

        trace!(
          "allocate({size}) -> block {current} at offset {}",
          block.offset
        );
        return Some(Handle(current));
      }

      current = block.next;
      if current == self.head {
        debug!("allocate({size}) failed: no free block large enough");
        return None;
      }
    }
  }

  /// Returns a block to the pool.
  ///
  /// `None` is a no-op. The handle is invalid for any further use after
  /// this call; passing a handle that was already deallocated is a caller
  /// contract violation (see [`Handle`]).
  pub fn deallocate(
    &mut self,
    handle: Option<Handle>,
  ) {
    let Some(Handle(index)) = handle else {
      return;
    };

    self.blocks[index].free = true;
    trace!(
      "deallocate block {index} at offset {}",
      self.blocks[index].offset
    );
    self.merge(index);
  }

  /// Resizes a block, moving it if necessary.
  ///
  /// With `None` this behaves exactly like [`allocate`](Self::allocate).
  /// When the block already holds `new_size` bytes the same handle is
  /// returned, splitting off the surplus when it can host a header. When
  /// the block must grow, a fresh block is allocated, the old payload is
  /// copied over, and the old block is freed. If that fresh allocation
  /// fails, `None` is returned and the original block is left intact with
  /// its contents unchanged.
  pub fn reallocate(
    &mut self,
    handle: Option<Handle>,
    new_size: usize,
  ) -> Option<Handle> {
    let Some(handle) = handle else {
      return self.allocate(new_size);
    };

    if new_size > self.size() {
      return None;
    }
    let new_size = align!(new_size);
    let Handle(index) = handle;
    let size = self.blocks[index].size;

    if size >= new_size {
      if size > new_size + HEADER_SIZE {
        self.split(index, new_size);

        // The remainder may border an already-free neighbor.
        let rest = self.blocks[index].next;
        self.merge(rest);
      }
      return Some(handle);
    }

    let new_handle = self.allocate(new_size)?;
    let Handle(new_index) = new_handle;

    let src = self.blocks[index].offset + HEADER_SIZE;
    let dst = self.blocks[new_index].offset + HEADER_SIZE;
    self.arena.copy_within(src..src + size, dst);

    self.deallocate(Some(handle));
    trace!("reallocate moved block {index} to block {new_index}");

    Some(new_handle)
  }

  /// Total arena capacity in bytes, constant for the allocator's lifetime.
  pub fn size(&self) -> usize {
    self.arena.len()
  }

  /// Usable size of the given block, or 0 for `None`.
  ///
  /// This may exceed the size originally requested, either from rounding
  /// or because a whole block was granted without splitting.
  pub fn block_size(
    &self,
    handle: Option<Handle>,
  ) -> usize {
    match handle {
      Some(Handle(index)) => self.blocks[index].size,
      None => 0,
    }
  }

  /// Borrows the payload bytes of an allocated block.
  pub fn data(
    &self,
    handle: Handle,
  ) -> &[u8] {
    let block = &self.blocks[handle.0];
    let start = block.offset + HEADER_SIZE;

    &self.arena[start..start + block.size]
  }

  /// Mutably borrows the payload bytes of an allocated block.
  pub fn data_mut(
    &mut self,
    handle: Handle,
  ) -> &mut [u8] {
    let block = self.blocks[handle.0];
    let start = block.offset + HEADER_SIZE;

    &mut self.arena[start..start + block.size]
  }

  /// Sum of the usable bytes of all free blocks.
  ///
  /// Contiguity is not implied: a single allocation of this size may still
  /// fail when the free space is fragmented.
  pub fn free_bytes(&self) -> usize {
    let mut total = 0;

    self.walk(|block| {
      if block.free {
        total += block.size;
      }
    });

    total
  }

  /// Number of blocks currently in the list, free and occupied.
  pub fn block_count(&self) -> usize {
    let mut count = 0;

    self.walk(|_| count += 1);

    count
  }

  /// Carves the tail of the block at `index` into a new free block.
  ///
  /// The new block starts `HEADER_SIZE + size` bytes into the original
  /// block, inherits the remainder as its size, and is spliced into the
  /// list right after the original, whose size shrinks to `size`. This is
  /// the only way new block boundaries are introduced.
  fn split(
    &mut self,
    index: usize,
    size: usize,
  ) {
    let block = self.blocks[index];
    let rest = Block::new(
      block.offset + HEADER_SIZE + size,
      block.size - size - HEADER_SIZE,
      true,
      index,
      block.next,
    );

    let rest_index = self.insert(rest);
    self.blocks[block.next].prev = rest_index;
    self.blocks[index].next = rest_index;
    self.blocks[index].size = size;
  }

  /// Coalesces the free block at `index` with its physically adjacent
  /// neighbors.
  ///
  /// Two checks in fixed order: first the following block is absorbed when
  /// free, then the block itself is absorbed into the preceding block when
  /// that one is free. The second check sees the size produced by the
  /// first, so a run of three mutually free neighbors collapses in one
  /// call. A block's list `next` wraps from the arena's end back to the
  /// head block, and those two are not physically adjacent, so absorb-next
  /// is skipped for the last block and absorb-prev is skipped for the head.
  fn merge(
    &mut self,
    index: usize,
  ) {
    let next = self.blocks[index].next;
    if next != self.head && self.blocks[next].free {
      self.blocks[index].size += HEADER_SIZE + self.blocks[next].size;

      let after = self.blocks[next].next;
      self.blocks[index].next = after;
      self.blocks[after].prev = index;
      self.release(next);
    }

    let prev = self.blocks[index].prev;
    if index != self.head && self.blocks[prev].free {
      self.blocks[prev].size += HEADER_SIZE + self.blocks[index].size;

      let next = self.blocks[index].next;
      self.blocks[prev].next = next;
      self.blocks[next].prev = prev;
      self.release(index);
    }
  }

  /// Stores a descriptor, reusing a spare table slot when one exists.
  fn insert(
    &mut self,
    block: Block,
  ) -> usize {
    match self.spare.pop() {
      Some(index) => {
        self.blocks[index] = block;
        index
      }
      None => {
        self.blocks.push(block);
        self.blocks.len() - 1
      }
    }
  }

  /// Retires a descriptor slot for reuse by a later split.
  fn release(
    &mut self,
    index: usize,
  ) {
    self.spare.push(index);
  }

  /// Visits every block once, in arena address order starting at the head.
  fn walk<F>(
    &self,
    mut visit: F,
  ) where
    F: FnMut(&Block),
  {
    let mut current = self.head;
    loop {
      let block = &self.blocks[current];
      visit(block);

      current = block.next;
      if current == self.head {
        break;
      }
    }
  }
}
