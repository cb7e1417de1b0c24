//! Overflow policies and their common policy algebra.
//!
//! A policy decides what happens when a value outside of a bounded
//! integer's range is assigned to it. Arithmetic on bounded integers never
//! consults the policy, because the range of the result is proven; the
//! policy only matters when a value is reconciled with a narrower range,
//! for example in `try_new`, `set` and the compound assignments.

use std::fmt::Debug;

use crate::error::RangeError;
use crate::range::Range;

/// Runtime description of a policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Null,
    Clamp,
    Throw,
    Wrap,
}

impl PolicyKind {
    /// The policy carried by the result of combining operands with the
    /// policies `self` and `other`.
    ///
    /// Equal policies are kept; the null policy gives way to the other;
    /// two different non-null policies resolve to the null policy.
    pub const fn common(self, other: PolicyKind) -> PolicyKind {
        match (self, other) {
            (PolicyKind::Null, other) => other,
            (this, PolicyKind::Null) => this,
            (this, other) => {
                if this as u8 == other as u8 {
                    this
                } else {
                    PolicyKind::Null
                }
            }
        }
    }
}

/// An overflow policy.
///
/// The policy tags are uninhabited types, used only as type parameters.
pub trait Policy: Copy + Debug + Send + Sync + 'static {
    const KIND: PolicyKind;
    /// The policy wraps around instead of saturating or failing.
    const IS_MODULO: bool;
    /// An out of range value is treated as an error by the policy.
    const OVERFLOW_IS_ERROR: bool;

    /// Reconcile `value` with `range`.
    ///
    /// A value inside the range is always returned unchanged.
    fn assign(value: i128, range: Range) -> Result<i128, RangeError>;
}

/// No check: an out of range value is a contract violation.
///
/// Debug builds panic on it; release builds keep the value as it is, and
/// storing it truncates it to the storage type. Use this where the range was
/// already proven by the surrounding code.
#[derive(Copy, Clone, Debug)]
pub enum NullPolicy {}

/// Saturate to the nearest bound.
#[derive(Copy, Clone, Debug)]
pub enum ClampPolicy {}

/// Reject the value with a [`RangeError`].
#[derive(Copy, Clone, Debug)]
pub enum ThrowPolicy {}

/// Wrap around modulo the size of the range.
#[derive(Copy, Clone, Debug)]
pub enum WrapPolicy {}

impl Policy for NullPolicy {
    const KIND: PolicyKind = PolicyKind::Null;
    const IS_MODULO: bool = false;
    const OVERFLOW_IS_ERROR: bool = true;

    #[inline]
    fn assign(value: i128, range: Range) -> Result<i128, RangeError> {
        debug_assert!(range.contains(value),
                      "got a value of {} but expected a value in the range {}", value, range);
        Ok(value)
    }
}

impl Policy for ClampPolicy {
    const KIND: PolicyKind = PolicyKind::Clamp;
    const IS_MODULO: bool = false;
    const OVERFLOW_IS_ERROR: bool = false;

    #[inline]
    fn assign(value: i128, range: Range) -> Result<i128, RangeError> {
        let clamped = range.clamp(value);
        if clamped != value {
            tracing::trace!(value = %value, range = %range, clamped = %clamped, "clamped out of range value");
        }
        Ok(clamped)
    }
}

impl Policy for ThrowPolicy {
    const KIND: PolicyKind = PolicyKind::Throw;
    const IS_MODULO: bool = false;
    const OVERFLOW_IS_ERROR: bool = true;

    #[inline]
    fn assign(value: i128, range: Range) -> Result<i128, RangeError> {
        if range.contains(value) {
            Ok(value)
        } else {
            tracing::debug!(value = %value, range = %range, "rejected out of range value");
            Err(RangeError::new(value, range.min(), range.max()))
        }
    }
}

impl Policy for WrapPolicy {
    const KIND: PolicyKind = PolicyKind::Wrap;
    const IS_MODULO: bool = true;
    const OVERFLOW_IS_ERROR: bool = false;

    fn assign(value: i128, range: Range) -> Result<i128, RangeError> {
        if range.contains(value) {
            return Ok(value);
        }
        // The full range contains every value, so the modulus fits.
        let modulus = range.span() + 1;
        let wrapped = if value > range.max() {
            let offset = (value.wrapping_sub(range.max()) as u128 - 1) % modulus;
            (range.min() as u128).wrapping_add(offset) as i128
        } else {
            let offset = (range.min().wrapping_sub(value) as u128 - 1) % modulus;
            (range.max() as u128).wrapping_sub(offset) as i128
        };
        tracing::trace!(value = %value, range = %range, wrapped = %wrapped, "wrapped out of range value");
        Ok(wrapped)
    }
}

/// Represents the combination of two policies `P` and `Q`, implemented on
/// the pair `(P, Q)`.
///
/// Follows the same rule as [`PolicyKind::common`].
pub trait CommonPolicy {
    type Output: Policy;
}

/// The common policy of `P` and `Q`.
pub type Common<P, Q> = <(P, Q) as CommonPolicy>::Output;

macro_rules! common_policy {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
        impl CommonPolicy for ($lhs, $rhs) { type Output = $out; }
        )*
    }
}

common_policy! {
    NullPolicy, NullPolicy => NullPolicy;
    NullPolicy, ClampPolicy => ClampPolicy;
    NullPolicy, ThrowPolicy => ThrowPolicy;
    NullPolicy, WrapPolicy => WrapPolicy;
    ClampPolicy, NullPolicy => ClampPolicy;
    ClampPolicy, ClampPolicy => ClampPolicy;
    ClampPolicy, ThrowPolicy => NullPolicy;
    ClampPolicy, WrapPolicy => NullPolicy;
    ThrowPolicy, NullPolicy => ThrowPolicy;
    ThrowPolicy, ClampPolicy => NullPolicy;
    ThrowPolicy, ThrowPolicy => ThrowPolicy;
    ThrowPolicy, WrapPolicy => NullPolicy;
    WrapPolicy, NullPolicy => WrapPolicy;
    WrapPolicy, ClampPolicy => NullPolicy;
    WrapPolicy, ThrowPolicy => NullPolicy;
    WrapPolicy, WrapPolicy => WrapPolicy;
}
