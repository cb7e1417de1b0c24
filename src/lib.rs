//! Integers whose minimum and maximum are part of their type.
//!
//! An [`Integer<MIN, MAX, S, P>`](struct.Integer.html) holds a value in the
//! range `[MIN, MAX]`, stored in the builtin `S` and reconciled with its
//! range by the overflow policy `P`. Arithmetic never overflows: the range
//! of each result is computed while compiling, from the ranges of the
//! operands, and the result type must carry exactly that range.
//!
//! We do all of the range bookkeeping in `const fn`s over `i128` bounds, so
//! a wrong range, an impossible conversion or a division by a range of only
//! zero is a compile error rather than a runtime check.
//!
//! # Basic Parts
//!
//! - [`Integer`](struct.Integer.html) is the bounded integer. Its storage `S`
//!   is the builtin that a width class picks for the range:
//!   [`Width::Least`](enum.Width.html) for the narrowest,
//!   `Width::Fast` for at least 32 bits.
//! - The policy is one of [`NullPolicy`](policy/enum.NullPolicy.html) (the
//!   default, no check), `ClampPolicy`, `ThrowPolicy` or `WrapPolicy`. It is
//!   only consulted when a value is narrowed into a range, as in `try_new`,
//!   `set` or `add_assign`, and reports rejection with a
//!   [`RangeError`](struct.RangeError.html).
//! - [`Constant<N>`](struct.Constant.html), made by
//!   [`constant::<N>()`](fn.constant.html), is the zero sized integer `N`. It
//!   is the operand with the tightest range.
//! - Builtin integers work as operands too, with the range of their type.
//!   All operands implement [`Bounded`](trait.Bounded.html).
//! - Spare representations, the bit patterns of `S` outside of the range,
//!   are exposed by [`Tombstone`](trait.Tombstone.html) and let
//!   [`Optional`](struct.Optional.html) have the size of its value.
//!
//! # Result Types
//!
//! The result type of an operation is named by the caller and checked.
//! Rust does not let us compute a type from a `const` expression, so the
//! range goes in a type annotation and the operation proves that it is the
//! computed one.
//!
//! # Example
//!
//! ```rust
//! use bounded::{constant, Integer, RangeError};
//! use bounded::policy::ThrowPolicy;
//!
//! type Hour = Integer<0, 23, u8, ThrowPolicy>;
//!
//! fn later(hour: Hour, by: Integer<0, 5, u8>) -> Result<Hour, RangeError> {
//!     // [0, 23] + [0, 5] is [0, 28]
//!     let sum: Integer<0, 28, u8, ThrowPolicy> = hour.add(by);
//!     Hour::try_new(sum)
//! }
//!
//! let hour = Hour::constant::<20>();
//! assert_eq!(later(hour, Integer::constant::<3>()).unwrap(), 23);
//! assert!(later(hour, Integer::constant::<4>()).is_err());
//!
//! // The remainder by a constant has a tight range of its own.
//! let wrapped: Integer<0, 11, u8, ThrowPolicy> = hour.rem(constant::<12>());
//! assert_eq!(wrapped, 8);
//! ```
//!
#![doc(html_root_url="https://docs.rs/bounded/0.1/")]

pub mod arith;
pub mod common;
pub mod comparison;
mod constant;
mod error;
mod integer;
mod integer_traits;
pub mod minmax;
mod optional;
pub mod policy;
mod range;
pub mod storage;
pub mod tombstone;

pub use constant::{constant, Constant};
pub use error::RangeError;
pub use integer::Integer;
pub use integer_traits::Bounded;
pub use optional::Optional;
pub use range::Range;

pub use minmax::{max, min};
pub use policy::{ClampPolicy, NullPolicy, Policy, ThrowPolicy, WrapPolicy};
pub use storage::{Layout, Storage, Width};
pub use tombstone::Tombstone;
