//! Fixed-size owned storage blocks for the vekta container.
//!
//! This is the leaf crate of the workspace, with no internal dependencies.
//! It defines [`Block`], an exclusively owned contiguous heap allocation
//! that is sized once at construction and never resized in place. Capacity
//! changes in the container above are expressed as "allocate a replacement
//! block, relocate, swap" — the block itself only knows how to hold slots
//! and exchange storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;

pub use block::Block;
