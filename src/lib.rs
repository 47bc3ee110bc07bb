//! # fixedpool - A Fixed-Capacity Memory Pool Allocator
//!
//! This crate provides a **pool allocator** that manages a single,
//! fixed-size byte arena with a first-fit free list. It is meant for
//! resource-constrained environments (think microcontrollers) where a
//! general-purpose heap is unavailable or unwelcome.
//!
//! ## Overview
//!
//! ```text
//!   Pool Allocator Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      ARENA (fixed capacity)                          │
//!   │                                                                      │
//!   │   ┌────┬───────┬────┬─────┬────┬──────────┬────┬─────────────────┐   │
//!   │   │ H1 │  A1   │ H2 │ A2  │ H3 │   free   │ H4 │      free       │   │
//!   │   └────┴───────┴────┴─────┴────┴──────────┴────┴─────────────────┘   │
//!   │     ▲             ▲          ▲                                       │
//!   │     │             │          │                                       │
//!   │   head block    blocks form a circular list in arena order          │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Allocation walks the list from the head and grants the FIRST free
//!   block that fits, splitting off the remainder as a new free block.
//!   Deallocation merges the block with free neighbors immediately.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   fixedpool
//!   ├── align      - Alignment macro (align!)
//!   ├── block      - Block descriptor and layout constants (internal)
//!   ├── error      - Construction error type
//!   └── pool       - PoolAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fixedpool::PoolAllocator;
//!
//! let mut pool = PoolAllocator::new(256)?;
//!
//! // Allocate a block; sizes are rounded up to 4-byte multiples.
//! let handle = pool.allocate(24).expect("arena has room");
//! assert!(pool.block_size(Some(handle)) >= 24);
//!
//! // Use the payload.
//! pool.data_mut(handle).fill(0xAB);
//! assert_eq!(pool.data(handle)[0], 0xAB);
//!
//! // Resize in place or with a move, then free.
//! let handle = pool.reallocate(Some(handle), 48).expect("arena has room");
//! pool.deallocate(Some(handle));
//! # Ok::<(), fixedpool::PoolError>(())
//! ```
//!
//! ## How It Works
//!
//! The original form of this allocator embeds an intrusive header in front
//! of every payload and recovers it by pointer arithmetic. Here the same
//! bookkeeping lives in a side table of block descriptors addressed by
//! index, and callers hold an opaque [`Handle`] instead of a raw pointer:
//!
//! ```text
//!   Descriptor table (side table, index-linked):
//!
//!   ┌───────────────────────────────┐      arena
//!   │ 0: offset   0, 12 B, used ────┼──►  ┌────────┬──────────┐
//!   │    prev 2, next 1             │     │ header │ payload  │
//!   ├───────────────────────────────┤     │ 16 B   │ size B   │
//!   │ 1: offset  28, 40 B, free     │     └────────┴──────────┘
//!   ├───────────────────────────────┤              ▲
//!   │ 2: offset  84, ...            │              └── data(handle)
//!   └───────────────────────────────┘
//! ```
//!
//! Every block still reserves [`HEADER_SIZE`] bytes of arena ahead of its
//! payload, so the byte accounting matches the intrusive layout exactly:
//! summing `HEADER_SIZE + size` over all blocks always yields the arena
//! capacity.
//!
//! ## Features
//!
//! - **First-fit allocation**: deterministic, lowest-address block wins
//! - **Boundary coalescing**: free neighbors merge immediately
//! - **Data-preserving reallocation**: failed growth never loses contents
//! - **Safe API**: handles and slices instead of raw pointers
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no internal synchronization; external
//!   locking is required to share an instance, even for read-only queries
//! - **Fixed capacity**: the pool never grows; exhaustion is signalled by
//!   `None` until something is freed
//! - **4-byte alignment only**: no larger alignment guarantees
//! - **No misuse detection**: stale or duplicated handles are not
//!   validated; they cannot break memory safety but may corrupt the
//!   pool's bookkeeping

pub mod align;
mod block;
mod error;
mod pool;

pub use block::{ALIGNMENT, HEADER_SIZE, Handle};
pub use error::PoolError;
pub use pool::PoolAllocator;
