//! The fixed-capacity arbitrary-precision integer: `BigInt<K>` owns `K`
//! words of stack storage; [`view::BigIntView`] borrows a word slice plus
//! sign for operations that work on external storage. Capacity overflow is
//! always a reportable condition (a `bool` or residual word), never a
//! silent wraparound — the one exception, documented where it happens, is
//! left-shift dropping bits past capacity, which is deliberate historical
//! behavior.

#[allow(clippy::module_inception)]
mod bigint;
pub mod error;
mod format;
mod ops;
mod parse;
pub mod view;

pub use bigint::BigInt;
pub use error::{BigIntError, BigIntErrorKind, ParseBigIntError, ParseErrorKind};
pub use view::BigIntView;
