//! Error types for the allocator and the heap validator.

use thiserror::Error;

/// Failure of a heap-level operation.
///
/// The allocating entry points surface this as a `None` result; only
/// construction propagates it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The arena refused to grow: the requested extension would exceed the
    /// configured byte limit (or overflow the address computation).
    #[error("arena exhausted: {requested} additional bytes requested, limit {limit}")]
    ArenaExhausted { requested: usize, limit: usize },
}

/// One consistency violation found by the heap validator.
///
/// Violations are reported, never corrected; any of these indicates a
/// defect in the allocator itself, not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("invalid prologue header")]
    BadPrologueHeader,
    #[error("invalid prologue footer")]
    BadPrologueFooter,
    #[error("invalid epilogue header at offset {0}")]
    BadEpilogue(usize),
    #[error("block at offset {0} is not aligned")]
    Misaligned(usize),
    #[error("block at offset {offset} with size {size} extends outside the arena")]
    OutOfArena { offset: usize, size: usize },
    #[error("block at offset {offset} has size {size}, below the minimum block size")]
    Undersized { offset: usize, size: usize },
    #[error("header/footer mismatch for free block at offset {0}")]
    TagMismatch(usize),
    #[error("next_free link of free block at offset {0} does not point back")]
    BrokenNextLink(usize),
    #[error("prev_free link of free block at offset {0} does not point back")]
    BrokenPrevLink(usize),
    #[error("adjacent free blocks at offsets {0} and {1} were not coalesced")]
    UncoalescedNeighbors(usize, usize),
    #[error("free count mismatch: physical walk found {walked}, index reaches {indexed}")]
    FreeCountMismatch { walked: usize, indexed: usize },
    #[error("block at offset {offset} sits in bucket {bucket} but belongs in bucket {expected}")]
    WrongBucket {
        offset: usize,
        bucket: usize,
        expected: usize,
    },
    #[error("allocated block at offset {0} is reachable from the free-list index")]
    IndexedButAllocated(usize),
    #[error("free list for bucket {0} does not terminate")]
    IndexCycle(usize),
}
