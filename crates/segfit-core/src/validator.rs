//! Heap consistency checker.
//!
//! Diagnostic-only: walks the arena physically from the first real block to
//! the epilogue, cross-checks the free-list index against the walk, and
//! reports every violation found. Nothing is corrected; a violation means
//! a defect in the allocator, not a recoverable runtime condition. Not on
//! the allocation hot path; intended for debug configurations and tests.

use serde::Serialize;

use crate::allocator::Heap;
use crate::config::{DSIZE, MIN_BLOCK, NUM_BUCKETS};
use crate::error::Violation;
use crate::events::EventLevel;
use crate::free_list::FreeListIndex;
use crate::layout::{self, BlockView, FIRST_BLOCK, Header, PROLOGUE_BP};

/// Summary of a clean heap, produced by a successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapReport {
    pub arena_len: usize,
    /// Real blocks between prologue and epilogue.
    pub total_blocks: usize,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    /// Sum of free block sizes, boundary tags included.
    pub free_bytes: usize,
    pub largest_free_block: usize,
    /// Blocks reachable from each bucket head.
    pub bucket_lengths: [usize; NUM_BUCKETS],
}

impl Heap {
    /// Checks every heap invariant and returns a summary, or the full list
    /// of violations found. With `verbose` set, one `Debug` event is
    /// recorded per block visited.
    pub fn check(&mut self, verbose: bool) -> Result<HeapReport, Vec<Violation>> {
        let arena_len = self.arena.len();
        let mut violations = Vec::new();

        let prologue = layout::header(&self.arena, PROLOGUE_BP);
        if prologue.size() != DSIZE || !prologue.is_allocated() {
            violations.push(Violation::BadPrologueHeader);
        }
        // the prologue footer word sits at the prologue payload offset
        let prologue_footer = Header(self.arena.read_u32(PROLOGUE_BP));
        if prologue_footer.size() != DSIZE || !prologue_footer.is_allocated() {
            violations.push(Violation::BadPrologueFooter);
        }

        let mut total_blocks = 0;
        let mut allocated_blocks = 0;
        let mut walked_free = 0;
        let mut free_bytes = 0;
        let mut largest_free_block = 0;
        let mut prev_free_at: Option<usize> = None;

        let mut bp = FIRST_BLOCK;
        loop {
            if bp > arena_len {
                violations.push(Violation::OutOfArena {
                    offset: bp,
                    size: 0,
                });
                break;
            }
            let tag = layout::header(&self.arena, bp);
            if tag.size() == 0 {
                // epilogue: allocated, and the very last word of the arena
                if !tag.is_allocated() || bp != arena_len {
                    violations.push(Violation::BadEpilogue(bp));
                }
                break;
            }

            total_blocks += 1;
            if verbose {
                self.events.record(
                    EventLevel::Debug,
                    "check",
                    "visit_block",
                    Some(bp),
                    Some(tag.size()),
                    None,
                    if tag.is_allocated() {
                        "allocated"
                    } else {
                        "free"
                    },
                    String::new(),
                    arena_len,
                );
            }

            if bp % DSIZE != 0 {
                violations.push(Violation::Misaligned(bp));
            }
            if tag.size() < MIN_BLOCK {
                violations.push(Violation::Undersized {
                    offset: bp,
                    size: tag.size(),
                });
                break;
            }
            if bp + tag.size() > arena_len {
                violations.push(Violation::OutOfArena {
                    offset: bp,
                    size: tag.size(),
                });
                break;
            }

            match layout::view(&self.arena, bp) {
                BlockView::Allocated { .. } => {
                    allocated_blocks += 1;
                    prev_free_at = None;
                }
                BlockView::Free {
                    size,
                    next_free,
                    prev_free,
                } => {
                    walked_free += 1;
                    free_bytes += size;
                    largest_free_block = largest_free_block.max(size);

                    if layout::footer(&self.arena, bp) != tag {
                        violations.push(Violation::TagMismatch(bp));
                    }
                    if next_free != 0
                        && (!self.arena.contains(next_free)
                            || layout::prev_free(&self.arena, next_free) != bp)
                    {
                        violations.push(Violation::BrokenNextLink(bp));
                    }
                    if prev_free != 0
                        && (!self.arena.contains(prev_free)
                            || layout::next_free(&self.arena, prev_free) != bp)
                    {
                        violations.push(Violation::BrokenPrevLink(bp));
                    }
                    if let Some(prev) = prev_free_at {
                        violations.push(Violation::UncoalescedNeighbors(prev, bp));
                    }
                    prev_free_at = Some(bp);
                }
            }

            bp = layout::next_payload(&self.arena, bp);
        }

        // index side: every reachable entry must be a free block in its
        // correct bucket, and the reachable count must match the walk
        let cap = total_blocks + 1;
        let mut indexed = 0;
        let mut bucket_lengths = [0usize; NUM_BUCKETS];
        for (bucket, length) in bucket_lengths.iter_mut().enumerate() {
            let mut steps = 0;
            let mut fp = self.free_lists.head(bucket);
            while fp != 0 {
                if steps >= cap {
                    violations.push(Violation::IndexCycle(bucket));
                    break;
                }
                if !self.arena.contains(fp) {
                    violations.push(Violation::OutOfArena {
                        offset: fp,
                        size: 0,
                    });
                    break;
                }
                steps += 1;
                let tag = layout::header(&self.arena, fp);
                if tag.is_allocated() {
                    violations.push(Violation::IndexedButAllocated(fp));
                    break;
                }
                let expected = FreeListIndex::bucket_of(tag.size());
                if expected != bucket {
                    violations.push(Violation::WrongBucket {
                        offset: fp,
                        bucket,
                        expected,
                    });
                }
                fp = layout::next_free(&self.arena, fp);
            }
            *length = steps;
            indexed += steps;
        }
        if walked_free != indexed {
            violations.push(Violation::FreeCountMismatch {
                walked: walked_free,
                indexed,
            });
        }

        if violations.is_empty() {
            Ok(HeapReport {
                arena_len,
                total_blocks,
                allocated_blocks,
                free_blocks: walked_free,
                free_bytes,
                largest_free_block,
                bucket_lengths,
            })
        } else {
            self.events.record(
                EventLevel::Error,
                "check",
                "violations",
                None,
                None,
                None,
                "corrupt",
                format!("{} violation(s)", violations.len()),
                arena_len,
            );
            Err(violations)
        }
    }
}
