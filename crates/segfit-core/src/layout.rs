//! Boundary-tag block geometry.
//!
//! A block whose payload starts at offset `bp` carries a one-word header at
//! `bp - WSIZE` packing its size with two status bits. Free blocks mirror
//! the header in a footer at `bp + size - DSIZE` and repurpose their first
//! two payload words as intrusive free-list links; those words are only
//! touched by the free-list index while the block is free, so payload bytes
//! and link words are never live at the same time.

use crate::arena::Arena;
use crate::config::{DSIZE, WSIZE};

/// Allocation bit of a boundary-tag word.
pub const ALLOC: u32 = 0x1;
/// Cached allocation status of the physically previous block. Stored in
/// this block's header so allocated blocks need no footer.
pub const PREV_ALLOC: u32 = 0x2;

const SIZE_MASK: u32 = !0x7;

/// Payload offset of the prologue block (permanently allocated sentinel).
pub const PROLOGUE_BP: usize = DSIZE;
/// Payload offset of the first real block after the prologue.
pub const FIRST_BLOCK: usize = PROLOGUE_BP + DSIZE;

/// Decoded view of one boundary-tag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header(pub u32);

impl Header {
    /// Packs a size and both status bits into a tag word. `size` must be a
    /// multiple of the alignment unit; packing never clobbers the bits.
    pub fn pack(size: usize, prev_alloc: bool, alloc: bool) -> Self {
        debug_assert_eq!(size % DSIZE, 0, "unaligned block size {size}");
        let mut word = size as u32;
        if prev_alloc {
            word |= PREV_ALLOC;
        }
        if alloc {
            word |= ALLOC;
        }
        Self(word)
    }

    /// Block size with the low status bits masked off.
    pub fn size(self) -> usize {
        (self.0 & SIZE_MASK) as usize
    }

    pub fn is_allocated(self) -> bool {
        self.0 & ALLOC != 0
    }

    pub fn prev_allocated(self) -> bool {
        self.0 & PREV_ALLOC != 0
    }

    pub fn with_alloc(self, alloc: bool) -> Self {
        Self(if alloc { self.0 | ALLOC } else { self.0 & !ALLOC })
    }

    pub fn with_prev_alloc(self, prev_alloc: bool) -> Self {
        Self(if prev_alloc {
            self.0 | PREV_ALLOC
        } else {
            self.0 & !PREV_ALLOC
        })
    }
}

/// Header word of the block whose payload starts at `bp`.
pub fn header(arena: &Arena, bp: usize) -> Header {
    Header(arena.read_u32(bp - WSIZE))
}

pub fn write_header(arena: &mut Arena, bp: usize, tag: Header) {
    arena.write_u32(bp - WSIZE, tag.0);
}

/// Footer word of the block at `bp`. Meaningful only while the block is
/// free; allocated blocks have no footer.
pub fn footer(arena: &Arena, bp: usize) -> Header {
    Header(arena.read_u32(bp + header(arena, bp).size() - DSIZE))
}

pub fn write_footer(arena: &mut Arena, bp: usize, tag: Header) {
    arena.write_u32(bp + tag.size() - DSIZE, tag.0);
}

/// Payload offset of the physically next block.
pub fn next_payload(arena: &Arena, bp: usize) -> usize {
    bp + header(arena, bp).size()
}

/// Payload offset of the physically previous block, located through its
/// footer. Valid only when the previous block is free.
pub fn prev_payload(arena: &Arena, bp: usize) -> usize {
    bp - Header(arena.read_u32(bp - DSIZE)).size()
}

/// Intrusive successor link of a free block (0 = end of list).
pub fn next_free(arena: &Arena, bp: usize) -> usize {
    arena.read_u64(bp) as usize
}

pub fn set_next_free(arena: &mut Arena, bp: usize, target: usize) {
    arena.write_u64(bp, target as u64);
}

/// Intrusive predecessor link of a free block (0 = list head).
pub fn prev_free(arena: &Arena, bp: usize) -> usize {
    arena.read_u64(bp + DSIZE) as usize
}

pub fn set_prev_free(arena: &mut Arena, bp: usize, target: usize) {
    arena.write_u64(bp + DSIZE, target as u64);
}

/// Tagged view of one block, selected by its allocation bit. Free-list
/// link words are only exposed when the block is actually free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockView {
    Allocated {
        size: usize,
    },
    Free {
        size: usize,
        next_free: usize,
        prev_free: usize,
    },
}

pub fn view(arena: &Arena, bp: usize) -> BlockView {
    let tag = header(arena, bp);
    if tag.is_allocated() {
        BlockView::Allocated { size: tag.size() }
    } else {
        BlockView::Free {
            size: tag.size(),
            next_free: next_free(arena, bp),
            prev_free: prev_free(arena, bp),
        }
    }
}
