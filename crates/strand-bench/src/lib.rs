//! Shared builders for the strand benchmarks.

use strand::{ArraySeq, LinkedSeq};

/// Build an [`ArraySeq`] holding `0..n`.
pub fn array_of(n: u64) -> ArraySeq<u64> {
    let mut seq = ArraySeq::new();
    for i in 0..n {
        seq.append(i);
    }
    seq
}

/// Build a [`LinkedSeq`] holding `0..n`.
pub fn linked_of(n: u64) -> LinkedSeq<u64> {
    let mut seq = LinkedSeq::new();
    for i in 0..n {
        seq.append(i);
    }
    seq
}

/// Build an [`ArraySeq`] holding `n` values in descending order, the
/// worst case for the exchange sorts.
pub fn array_descending(n: u64) -> ArraySeq<u64> {
    let mut seq = ArraySeq::new();
    for i in (0..n).rev() {
        seq.append(i);
    }
    seq
}

/// Build a [`LinkedSeq`] holding `n` values in descending order.
pub fn linked_descending(n: u64) -> LinkedSeq<u64> {
    let mut seq = LinkedSeq::new();
    for i in (0..n).rev() {
        seq.append(i);
    }
    seq
}
