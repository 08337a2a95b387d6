//! Lazy, pull-based sequence producers.
//!
//! This crate provides a catalog of producers that construct ordered,
//! pull-based sequences of values — potentially infinite — from finite
//! inputs, other sequences, or generative rules. It offers:
//!
//! - **Finite producers**: [`from_collection`], [`replicate`], [`chain`],
//!   [`compress`]
//! - **Synchronized iteration**: [`zip_exact`], with strict equal-length
//!   validation
//! - **Infinite producers**: [`count`] (arithmetic progression) and [`cycle`]
//!   (repetition of a finite text base)
//! - **Running reduction**: [`accumulate`] with a closed set of operators
//! - **Windowing**: [`chunks`] / [`text_chunks`] (fixed-size, non-overlapping
//!   windows) and [`pairwise`] (the 2-wide specialization)
//!
//! Every producer is a plain pull-driven state machine: an `Iterator` that
//! computes the next value when the consumer asks for it. Nothing runs in the
//! background, so dropping a handle — finite or infinite — cancels production
//! and releases its state.
//!
//! # Key Types
//!
//! - [`Sequence`] - the pull contract, implemented by every producer
//! - [`SequenceExt`] - extension trait providing adapter methods
//! - [`Operator`] - the closed operator enumeration for [`accumulate`]

pub mod accumulate;
pub mod chain;
pub mod chunk;
pub mod compress;
pub mod count;
pub mod cycle;
pub mod from_collection;
pub mod replicate;
pub mod sequence;
pub mod zip;

pub use accumulate::{Accumulate, Operator, accumulate, accumulate_named};
pub use chain::{Chain, chain};
pub use chunk::{Chunks, Pairwise, TextChunks, chunks, pairwise, text_chunks};
pub use compress::{Compress, compress};
pub use count::{Count, count};
pub use cycle::{Cycle, cycle};
pub use from_collection::{FromCollection, from_collection};
pub use replicate::{Replicate, replicate};
pub use sequence::{Sequence, SequenceExt};
pub use zip::{ZipExact, ensure_same_length, zip_exact};
