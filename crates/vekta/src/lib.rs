//! A growable contiguous array container with explicit capacity control.
//!
//! `vekta` reimplements the classic growable-array container from first
//! principles on top of [`vekta_block::Block`], a fixed-size exclusively
//! owned allocation. The container is deliberately small and transparent:
//! one storage block, one length, and a handful of well-specified growth
//! and shifting algorithms.
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T>
//! ├── Block<T>   exclusively owned storage, capacity() slots, all valid
//! └── len        visible prefix length, len <= capacity()
//! ```
//!
//! Capacity changes flow through a single path: allocate a replacement
//! block, relocate the visible prefix into it, swap it into place, release
//! the old allocation. The container is therefore never observable in a
//! partially relocated state.
//!
//! # Construction intents
//!
//! `GrowVec::with_len(10)` means "ten default elements"; pre-sizing storage
//! without populating it goes through a [`ReserveHint`]:
//!
//! ```
//! use vekta::{reserve, GrowVec};
//!
//! let v: GrowVec<u32> = GrowVec::with_hint(reserve(10));
//! assert_eq!((v.len(), v.capacity()), (0, 10));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hint;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::AccessError;
pub use hint::{reserve, ReserveHint};
pub use vec::GrowVec;
