//! Segregated free-list index.
//!
//! Twelve intrusive doubly-linked lists, one per size class. Only the
//! bucket heads live in this struct; the link words themselves sit inside
//! the free blocks' payload bytes (see [`crate::layout`]). Head offset 0
//! means an empty bucket.

use crate::arena::Arena;
use crate::config::{BUCKET_LIMITS, NUM_BUCKETS};
use crate::layout;

#[derive(Debug, Clone)]
pub struct FreeListIndex {
    heads: [usize; NUM_BUCKETS],
}

impl FreeListIndex {
    pub fn new() -> Self {
        Self {
            heads: [0; NUM_BUCKETS],
        }
    }

    /// Maps a block size to its bucket. Total over all sizes; everything
    /// above the last threshold lands in the overflow bucket.
    pub fn bucket_of(size: usize) -> usize {
        BUCKET_LIMITS
            .iter()
            .position(|&limit| size <= limit)
            .unwrap_or(NUM_BUCKETS - 1)
    }

    /// Head of `bucket`'s list (0 = empty).
    pub fn head(&self, bucket: usize) -> usize {
        self.heads[bucket]
    }

    /// Pushes the free block at `bp` onto the front of its bucket's list.
    pub fn insert(&mut self, arena: &mut Arena, bp: usize, size: usize) {
        let bucket = Self::bucket_of(size);
        let head = self.heads[bucket];
        layout::set_prev_free(arena, bp, 0);
        layout::set_next_free(arena, bp, head);
        if head != 0 {
            layout::set_prev_free(arena, head, bp);
        }
        self.heads[bucket] = bp;
    }

    /// Unlinks the free block at `bp` from its bucket's list in O(1) using
    /// its own links. Covers all four structural cases: sole element, head,
    /// tail, and interior.
    pub fn remove(&mut self, arena: &mut Arena, bp: usize, size: usize) {
        let next = layout::next_free(arena, bp);
        let prev = layout::prev_free(arena, bp);
        if prev != 0 {
            layout::set_next_free(arena, prev, next);
        } else {
            self.heads[Self::bucket_of(size)] = next;
        }
        if next != 0 {
            layout::set_prev_free(arena, next, prev);
        }
    }

    /// First block of size >= `asize`, scanning `asize`'s bucket front to
    /// back and then escalating through every larger bucket.
    pub fn find_fit(&self, arena: &Arena, asize: usize) -> Option<usize> {
        for bucket in Self::bucket_of(asize)..NUM_BUCKETS {
            let mut bp = self.heads[bucket];
            while bp != 0 {
                if layout::header(arena, bp).size() >= asize {
                    return Some(bp);
                }
                bp = layout::next_free(arena, bp);
            }
        }
        None
    }
}

impl Default for FreeListIndex {
    fn default() -> Self {
        Self::new()
    }
}
