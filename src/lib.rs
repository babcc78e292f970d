//! Zero-copy n-dimensional slice views and a fixed-capacity
//! arbitrary-precision integer: the numerical core shared by the rest of
//! the library.
//!
//! - [`ndslice`]: `Slice<C, N, K>`, a strided view over a linear backing
//!   store, parameterized by cursor type, rank, and a compile-time
//!   Contiguous/Canonical/Universal stride kind.
//! - [`bigint`]: `BigInt<K>`, a stack-allocated signed integer of up to
//!   `K` 64-bit words, with scalar arithmetic, shifts, and string
//!   conversion.
//!
//! Neither subsystem performs heap allocation on its hot path: `ndslice`
//! operations only ever compose views over a caller-supplied store, and
//! `bigint` arithmetic works entirely on stack-sized word arrays. The
//! exceptions are `ndslice::lazy::cached`'s memo table and `bigint`'s own
//! string parsing/formatting output buffers.

pub mod bigint;
pub mod ndslice;

pub use bigint::BigInt;
pub use ndslice::Slice;
