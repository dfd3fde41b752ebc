//! Heap geometry constants and tunable policy.
//!
//! The numeric constants here (alignment unit, minimum block, bucket
//! thresholds, growth quantum) are empirically chosen tunables. Changing
//! them changes fragmentation behavior, not correctness.

/// Header/footer word size in bytes.
pub const WSIZE: usize = 4;

/// Alignment unit in bytes (double word). Every payload offset and every
/// block size is a multiple of this.
pub const DSIZE: usize = 8;

/// Minimum block size in bytes: one header word, two 8-byte free-list
/// links, one footer word, rounded to the alignment unit.
pub const MIN_BLOCK: usize = 3 * DSIZE;

/// Default arena growth quantum in bytes. Small allocations that miss the
/// free lists grow the arena by at least this much to amortize growth cost.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 8;

/// Number of segregated free lists.
pub const NUM_BUCKETS: usize = 12;

/// Inclusive upper size bound of each bounded bucket, ascending. The final
/// bucket has no upper bound.
pub const BUCKET_LIMITS: [usize; NUM_BUCKETS - 1] =
    [24, 48, 72, 96, 120, 480, 960, 1920, 3840, 7680, 15360];

/// Rounds `n` up to the next multiple of the alignment unit.
pub fn align_up(n: usize) -> usize {
    (n + DSIZE - 1) & !(DSIZE - 1)
}

/// Tunable heap policy, fixed at construction.
#[derive(Debug, Clone)]
pub struct HeapConfig {
    /// Minimum bytes requested from the arena per growth. Rounded up to the
    /// alignment unit and to [`MIN_BLOCK`] at the point of use.
    pub chunk_size: usize,
    /// Hard cap on total arena bytes; growth past this fails.
    pub arena_limit: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            arena_limit: usize::MAX,
        }
    }
}
