//! Growable byte arena addressed by offsets.
//!
//! The arena is the only storage a heap owns: block headers, footers and
//! free-list links are all words inside it. Byte offsets play the role of
//! pointers, so the whole allocator stays in safe Rust; offset 0 is never
//! a valid payload and serves as the null sentinel.

use crate::config::WSIZE;
use crate::error::HeapError;

/// Contiguous, monotonically growing byte range backing one heap.
#[derive(Debug, Clone)]
pub struct Arena {
    bytes: Vec<u8>,
    limit: usize,
}

impl Arena {
    /// Creates an empty arena capped at `limit` total bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Current arena length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `offset` falls inside the arena.
    pub fn contains(&self, offset: usize) -> bool {
        offset < self.bytes.len()
    }

    /// Appends `delta` zeroed bytes and returns the offset of the start of
    /// the new region. Fails without partial growth when the extension
    /// would exceed the configured limit.
    pub fn grow(&mut self, delta: usize) -> Result<usize, HeapError> {
        let old_len = self.bytes.len();
        let new_len = old_len
            .checked_add(delta)
            .filter(|&n| n <= self.limit)
            .ok_or(HeapError::ArenaExhausted {
                requested: delta,
                limit: self.limit,
            })?;
        self.bytes.resize(new_len, 0);
        Ok(old_len)
    }

    /// Reads the header-sized word at `offset`.
    pub fn read_u32(&self, offset: usize) -> u32 {
        debug_assert_eq!(offset % WSIZE, 0, "unaligned word read at {offset}");
        u32::from_le_bytes([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ])
    }

    pub fn write_u32(&mut self, offset: usize, value: u32) {
        debug_assert_eq!(offset % WSIZE, 0, "unaligned word write at {offset}");
        self.bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Reads the link-sized word at `offset` (free-list next/prev slots).
    pub fn read_u64(&self, offset: usize) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.bytes[offset..offset + 8]);
        u64::from_le_bytes(word)
    }

    pub fn write_u64(&mut self, offset: usize, value: u64) {
        self.bytes[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    }

    /// Borrows `len` bytes starting at `offset`.
    pub fn bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.bytes[offset..offset + len]
    }

    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.bytes[offset..offset + len]
    }

    /// Copies `len` bytes from `src` to `dst` within the arena.
    pub fn copy_within(&mut self, src: usize, dst: usize, len: usize) {
        self.bytes.copy_within(src..src + len, dst);
    }

    /// Fills `len` bytes starting at `offset` with `value`.
    pub fn fill(&mut self, offset: usize, len: usize, value: u8) {
        self.bytes[offset..offset + len].fill(value);
    }
}
