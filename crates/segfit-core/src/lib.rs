//! # segfit-core
//!
//! A general-purpose dynamic memory allocator over a single growable byte
//! arena: segregated free lists (12 size classes), boundary-tag headers
//! with O(1) coalescing, first-fit within size class, eager coalescing on
//! release.
//!
//! The whole heap lives inside a `Vec<u8>` arena addressed by byte
//! offsets, so no `unsafe` code is needed: offsets play the role of
//! pointers (0 is null), and the free lists are intrusive structures
//! stored in the freed blocks' own payload bytes.
//!
//! ```
//! use segfit_core::Heap;
//!
//! let mut heap = Heap::with_defaults().unwrap();
//! let p = heap.allocate(100).unwrap();
//! heap.payload_mut(p, 100).fill(0x2A);
//! let q = heap.resize(p, 200).unwrap();
//! assert_eq!(heap.payload(q, 100), vec![0x2A; 100].as_slice());
//! heap.release(q);
//! heap.check(false).unwrap();
//! ```

pub mod allocator;
pub mod arena;
pub mod config;
pub mod error;
pub mod events;
pub mod free_list;
pub mod layout;
pub mod validator;

pub use allocator::{Heap, HeapStats};
pub use config::HeapConfig;
pub use error::{HeapError, Violation};
pub use events::{EventLevel, HeapEvent};
pub use validator::HeapReport;
