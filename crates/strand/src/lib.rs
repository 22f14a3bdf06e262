//! Interchangeable sequence containers.
//!
//! Provides two list implementations with an equivalent operation set,
//! so callers can swap one for the other without touching call sites:
//!
//! ```text
//! Seq<T> (shared contract)
//! ├── ArraySeq<T>   contiguous slot storage, lazy growth, O(1) indexed reads
//! └── LinkedSeq<T>  doubly-linked chain in a slot arena, O(1) end insertion
//! ```
//!
//! Both support appending, positional insertion, indexed access, removal by
//! index or by value, bulk clear, in-place ascending sort, and rendering to
//! a space-separated string.
//!
//! # Choosing a container
//!
//! `ArraySeq` keeps elements in a contiguous occupied prefix and shifts on
//! insert/remove; reads by index are O(1). `LinkedSeq` splices nodes in O(1)
//! once a position is reached, but reaching a position is a linear walk from
//! the head. Neither container is thread-safe; each assumes a single writer
//! with exclusive access.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod linked;
pub mod seq;

// Public re-exports for the primary API surface.
pub use array::ArraySeq;
pub use config::{ArrayConfig, GrowthPolicy};
pub use error::IndexOutOfRange;
pub use linked::LinkedSeq;
pub use seq::Seq;
