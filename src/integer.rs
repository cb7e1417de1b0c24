use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::arith;
use crate::common::Descriptor;
use crate::constant::Constant;
use crate::error::RangeError;
use crate::integer_traits::Bounded;
use crate::policy::{Common, CommonPolicy, NullPolicy, Policy};
use crate::range::Range;
use crate::storage::{Storage, Width};

/// An integer in the range `[MIN, MAX]`, stored as `S`, reconciling out of
/// range assignments through the policy `P`.
///
/// `S` is the builtin that a [`Width`] class picks for the range; anything
/// else fails to compile as soon as a value of the type is created.
///
/// Arithmetic is performed through methods with the same names as the
/// operator traits. The range of a result is written by the caller, usually
/// in a `let` annotation, and checked against the range computed by the
/// [`arith`](arith/index.html) functions while compiling:
///
/// ```
/// use bounded::Integer;
///
/// let x = Integer::<1, 10, u8>::constant::<9>();
/// let z = Integer::<-3, 11, i8>::constant::<4>();
/// let sum: Integer<-2, 21, i8> = x.add(z);
/// assert_eq!(sum, 13);
/// ```
///
/// A wrong range in the annotation is a compile error:
///
/// ```compile_fail
/// use bounded::Integer;
///
/// let x = Integer::<1, 10, u8>::constant::<9>();
/// let sum: Integer<-2, 22, i8> = x.add(x);
/// ```
pub struct Integer<const MIN: i128, const MAX: i128, S, P = NullPolicy> {
    value: S,
    policy: PhantomData<P>,
}

/// Check that the result range named by a caller is the computed one.
#[inline]
const fn prove(computed: Range, declared: Range) {
    if !computed.same(declared) {
        panic!("the declared range of the result is not the computed range");
    }
}

impl<const MIN: i128, const MAX: i128, S: Copy, P> Copy for Integer<MIN, MAX, S, P> { }
impl<const MIN: i128, const MAX: i128, S: Copy, P> Clone for Integer<MIN, MAX, S, P> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

#[allow(clippy::should_implement_trait)]
impl<const MIN: i128, const MAX: i128, S, P> Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    /// The range of the type.
    pub const RANGE: Range = Range::new(MIN, MAX);

    /// The storage width class of the type.
    pub const WIDTH: Width = match Width::of(S::LAYOUT, Range::new(MIN, MAX)) {
        Some(width) => width,
        None => panic!("the storage type is not the one a width class picks for this range"),
    };

    /// Range, policy and width class of the type.
    pub const DESCRIPTOR: Descriptor = Descriptor::new(Self::RANGE, P::KIND, Self::WIDTH);

    const WELL_FORMED: () = {
        let _ = Self::WIDTH;
    };

    /// Store a value that is known to be in range.
    #[inline]
    pub(crate) fn trusted(value: i128) -> Self {
        debug_assert!(Self::RANGE.contains(value));
        Self::assigned(value)
    }

    /// Store a value that went through the policy.
    #[inline]
    fn assigned(value: i128) -> Self {
        let () = Self::WELL_FORMED;
        Integer { value: S::from_i128(value), policy: PhantomData }
    }

    /// Wrap a storage value without looking at it, for spare
    /// representations.
    #[inline]
    pub(crate) fn from_storage_unchecked(value: S) -> Self {
        let () = Self::WELL_FORMED;
        Integer { value, policy: PhantomData }
    }

    #[inline]
    fn reconcile(value: i128) -> Result<Self, RangeError> {
        if Self::RANGE.contains(value) {
            Ok(Self::trusted(value))
        } else {
            P::assign(value, Self::RANGE).map(Self::assigned)
        }
    }

    /// Create from a value whose range is contained in `[MIN, MAX]`.
    ///
    /// No check is performed at runtime; a source range that is not
    /// contained is a compile error.
    #[inline]
    pub fn new<T: Bounded>(value: T) -> Self {
        const {
            if !Self::RANGE.includes(T::RANGE) {
                panic!("the source range is not contained in the target range");
            }
        }
        Self::trusted(value.get())
    }

    /// Create from a value whose range overlaps `[MIN, MAX]`.
    ///
    /// If the source range is contained, no check is performed. Otherwise
    /// the value is reconciled through the policy `P`, which may reject it.
    /// Ranges that do not overlap are a compile error.
    pub fn try_new<T: Bounded>(value: T) -> Result<Self, RangeError> {
        const {
            if !Self::RANGE.overlaps(T::RANGE) {
                panic!("the source range and the target range do not overlap");
            }
        }
        if Self::RANGE.includes(T::RANGE) {
            Ok(Self::trusted(value.get()))
        } else {
            Self::reconcile(value.get())
        }
    }

    /// The constant `N`, checked to be in range while compiling.
    #[inline]
    pub fn constant<const N: i128>() -> Self {
        Self::new(Constant::<N>)
    }

    /// The least value of the type.
    #[inline]
    pub fn min_value() -> Self {
        Self::trusted(MIN)
    }

    /// The greatest value of the type.
    #[inline]
    pub fn max_value() -> Self {
        Self::trusted(MAX)
    }

    /// The value, widened to `i128`.
    #[inline]
    pub fn get(&self) -> i128 {
        self.value.widen()
    }

    /// The underlying storage value.
    #[inline]
    pub fn storage(&self) -> S {
        self.value
    }

    #[inline]
    pub fn into_storage(self) -> S {
        self.value
    }

    /// Assign `value`, reconciled through the policy `P`.
    ///
    /// `self` is left unchanged if the policy rejects the value.
    pub fn set<T: Bounded>(&mut self, value: T) -> Result<(), RangeError> {
        *self = Self::try_new(value)?;
        Ok(())
    }

    /// `self + rhs`
    #[inline]
    pub fn add<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::add(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get() + rhs.get())
    }

    /// `self - rhs`
    #[inline]
    pub fn sub<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::sub(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get() - rhs.get())
    }

    /// `self * rhs`
    #[inline]
    pub fn mul<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::mul(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get() * rhs.get())
    }

    /// `self / rhs`, truncating toward zero.
    ///
    /// A divisor range of exactly zero is a compile error.
    ///
    /// ***Panics*** if `rhs` is zero, which its range may allow.
    #[inline]
    pub fn div<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::div(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get() / rhs.get())
    }

    /// `self % rhs`, with the sign of `self`.
    ///
    /// A divisor range of exactly zero is a compile error.
    ///
    /// ***Panics*** if `rhs` is zero, which its range may allow.
    #[inline]
    pub fn rem<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::rem(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get().wrapping_rem(rhs.get()))
    }

    /// `self << rhs`
    ///
    /// A possibly negative shift amount is a compile error.
    #[inline]
    pub fn shl<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::shl(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        let value = self.get();
        // A non-zero value proves a shift amount below 128.
        Integer::trusted(if value == 0 { 0 } else { value << rhs.get() })
    }

    /// `self >> rhs`, rounding toward negative infinity.
    ///
    /// A possibly negative shift amount is a compile error.
    #[inline]
    pub fn shr<R, const R_MIN: i128, const R_MAX: i128, T>(self, rhs: R)
        -> Integer<R_MIN, R_MAX, T, Common<P, R::Policy>>
        where R: Bounded,
              T: Storage,
              (P, R::Policy): CommonPolicy,
    {
        const { prove(arith::shr(Self::RANGE, R::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(arith::shifted_right(self.get(), rhs.get()))
    }

    /// `-self`
    #[inline]
    pub fn neg<const R_MIN: i128, const R_MAX: i128, T>(self) -> Integer<R_MIN, R_MAX, T, P>
        where T: Storage,
    {
        const { prove(arith::neg(Self::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(-self.get())
    }

    /// `+self`
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// `|self|`
    #[inline]
    pub fn abs<const R_MIN: i128, const R_MAX: i128, T>(self) -> Integer<R_MIN, R_MAX, T, P>
        where T: Storage,
    {
        const { prove(arith::abs(Self::RANGE), Range::new(R_MIN, R_MAX)) }
        Integer::trusted(self.get().abs())
    }

    /// Store an exact result, whose range overlaps the type, through the
    /// policy.
    #[inline]
    fn store(&mut self, value: i128) -> Result<(), RangeError> {
        *self = Self::reconcile(value)?;
        Ok(())
    }

    /// `self = self + rhs`, reconciled through the policy `P`.
    pub fn add_assign<R: Bounded>(&mut self, rhs: R) -> Result<(), RangeError> {
        const {
            if !Self::RANGE.overlaps(arith::add(Self::RANGE, R::RANGE)) {
                panic!("the sum never fits the range of the target");
            }
        }
        self.store(self.get() + rhs.get())
    }

    /// `self = self - rhs`, reconciled through the policy `P`.
    pub fn sub_assign<R: Bounded>(&mut self, rhs: R) -> Result<(), RangeError> {
        const {
            if !Self::RANGE.overlaps(arith::sub(Self::RANGE, R::RANGE)) {
                panic!("the difference never fits the range of the target");
            }
        }
        self.store(self.get() - rhs.get())
    }

    /// `self = self * rhs`, reconciled through the policy `P`.
    pub fn mul_assign<R: Bounded>(&mut self, rhs: R) -> Result<(), RangeError> {
        const {
            if !Self::RANGE.overlaps(arith::mul(Self::RANGE, R::RANGE)) {
                panic!("the product never fits the range of the target");
            }
        }
        self.store(self.get() * rhs.get())
    }

    /// `self = self / rhs`, reconciled through the policy `P`.
    ///
    /// ***Panics*** if `rhs` is zero.
    pub fn div_assign<R: Bounded>(&mut self, rhs: R) -> Result<(), RangeError> {
        const {
            if !Self::RANGE.overlaps(arith::div(Self::RANGE, R::RANGE)) {
                panic!("the quotient never fits the range of the target");
            }
        }
        self.store(self.get() / rhs.get())
    }

    /// `self = self % rhs`, reconciled through the policy `P`.
    ///
    /// ***Panics*** if `rhs` is zero.
    pub fn rem_assign<R: Bounded>(&mut self, rhs: R) -> Result<(), RangeError> {
        const {
            if !Self::RANGE.overlaps(arith::rem(Self::RANGE, R::RANGE)) {
                panic!("the remainder never fits the range of the target");
            }
        }
        self.store(self.get().wrapping_rem(rhs.get()))
    }

    /// Add one, reconciled through the policy `P`.
    #[inline]
    pub fn increment(&mut self) -> Result<(), RangeError> {
        self.add_assign(Constant::<1>)
    }

    /// Subtract one, reconciled through the policy `P`.
    #[inline]
    pub fn decrement(&mut self) -> Result<(), RangeError> {
        self.sub_assign(Constant::<1>)
    }
}

impl<const MIN: i128, const MAX: i128, S, P> Bounded for Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    const MIN: i128 = MIN;
    const MAX: i128 = MAX;
    type Policy = P;

    #[inline]
    fn get(&self) -> i128 {
        self.value.widen()
    }
}

impl<const MIN: i128, const MAX: i128, S, P> Debug for Integer<MIN, MAX, S, P>
    where S: Storage,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Integer<{}, {}>({})", MIN, MAX, self.value)
    }
}

impl<const MIN: i128, const MAX: i128, S, P> fmt::Display for Integer<MIN, MAX, S, P>
    where S: Storage,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Hashes exactly like the storage value.
impl<const MIN: i128, const MAX: i128, S, P> Hash for Integer<MIN, MAX, S, P>
    where S: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<const MIN: i128, const MAX: i128, S, P> From<Integer<MIN, MAX, S, P>> for i128
    where S: Storage,
          P: Policy,
{
    #[inline]
    fn from(value: Integer<MIN, MAX, S, P>) -> i128 {
        value.get()
    }
}

macro_rules! try_from_builtin {
    ($($t:ty)*) => {
        $(
        /// Strict conversion: values out of range are rejected whatever the
        /// policy.
        impl<const MIN: i128, const MAX: i128, S, P> TryFrom<$t> for Integer<MIN, MAX, S, P>
            where S: Storage,
                  P: Policy,
        {
            type Error = RangeError;

            fn try_from(value: $t) -> Result<Self, RangeError> {
                let value = value as i128;
                if Self::RANGE.contains(value) {
                    Ok(Self::trusted(value))
                } else {
                    Err(RangeError::new(value, MIN, MAX))
                }
            }
        }
        )*
    }
}

try_from_builtin! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize i128 }
