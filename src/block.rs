use static_assertions::{const_assert, const_assert_eq};

/// Allocation unit in bytes. Every block size and payload offset is a
/// multiple of this.
pub const ALIGNMENT: usize = 4;

/// Bytes of arena reserved at the start of every block for its header.
///
/// Descriptors live in a side table rather than inside the arena, but each
/// block still charges this many bytes so the on-arena layout matches the
/// original intrusive scheme: a four-field header on a 32-bit target.
pub const HEADER_SIZE: usize = 16;

const_assert!(HEADER_SIZE > 0);
const_assert_eq!(HEADER_SIZE % ALIGNMENT, 0);

/// Opaque handle to an allocated block, returned by
/// [`PoolAllocator::allocate`](crate::PoolAllocator::allocate).
///
/// Handles are plain indices into the allocator's descriptor table. Using a
/// handle after the block was deallocated (or deallocating it twice) is a
/// contract violation: it cannot cause memory unsafety, but it may corrupt
/// the pool's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub(crate) usize);

/// Descriptor for one block of the arena.
///
/// `prev` and `next` are descriptor-table indices linking the blocks into a
/// circular doubly-linked list in arena address order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Block {
  pub offset: usize,
  pub size: usize,
  pub free: bool,
  pub prev: usize,
  pub next: usize,
}

impl Block {
  pub fn new(
    offset: usize,
    size: usize,
    free: bool,
    prev: usize,
    next: usize,
  ) -> Self {
    Self { offset, size, free, prev, next }
  }
}
