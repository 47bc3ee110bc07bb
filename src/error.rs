use thiserror::Error;

use crate::block::HEADER_SIZE;

/// Errors reported when constructing a
/// [`PoolAllocator`](crate::PoolAllocator).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
  /// The requested capacity cannot hold even a single block header.
  #[error("capacity of {capacity} bytes cannot hold a block header ({min} bytes minimum)", min = HEADER_SIZE)]
  CapacityTooSmall { capacity: usize },
}
