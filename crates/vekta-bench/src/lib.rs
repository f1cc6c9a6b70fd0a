//! Benchmark workloads for the vekta container.
//!
//! Provides pre-built vectors for the bench targets:
//!
//! - [`sequential`]: 0..n pushed in order, amortized growth
//! - [`reserved_sequential`]: same contents behind one up-front reservation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vekta::{reserve, GrowVec};

/// Build a vector of `n` sequential values via amortized pushes.
pub fn sequential(n: u64) -> GrowVec<u64> {
    let mut v = GrowVec::new();
    for i in 0..n {
        v.push(i);
    }
    v
}

/// Build a vector of `n` sequential values behind a single reservation,
/// so no push reallocates.
pub fn reserved_sequential(n: u64) -> GrowVec<u64> {
    let mut v = GrowVec::with_hint(reserve(n as usize));
    for i in 0..n {
        v.push(i);
    }
    v
}
