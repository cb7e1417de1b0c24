//! Comparison across integer types.
//!
//! Builtin comparison operators need both operands converted to one type,
//! which for a signed and an unsigned operand silently changes the value of
//! negative numbers. The functions here compare the mathematical values of
//! any two integers.

use std::cmp::Ordering;

use crate::constant::Constant;
use crate::integer::Integer;
use crate::integer_traits::Bounded;
use crate::policy::Policy;
use crate::storage::Storage;

/// The value of a builtin integer, widened without loss.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wide {
    Signed(i128),
    Unsigned(u128),
}

impl Wide {
    /// Compare two widened values by their mathematical value.
    pub const fn compare(self, other: Wide) -> Ordering {
        match (self, other) {
            (Wide::Signed(a), Wide::Signed(b)) => order(a < b, a == b),
            (Wide::Unsigned(a), Wide::Unsigned(b)) => order(a < b, a == b),
            (Wide::Signed(a), Wide::Unsigned(b)) => {
                if a < 0 {
                    Ordering::Less
                } else {
                    order((a as u128) < b, a as u128 == b)
                }
            }
            (Wide::Unsigned(a), Wide::Signed(b)) => {
                if b < 0 {
                    Ordering::Greater
                } else {
                    order(a < b as u128, a == b as u128)
                }
            }
        }
    }
}

#[inline]
const fn order(less: bool, equal: bool) -> Ordering {
    if less {
        Ordering::Less
    } else if equal {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A builtin integer type.
pub trait Builtin: Copy + sealed::Sealed {
    fn wide(self) -> Wide;
}

macro_rules! builtin {
    ($($t:ty => $wide:ident;)*) => {
        $(
        impl sealed::Sealed for $t {}

        impl Builtin for $t {
            #[inline]
            fn wide(self) -> Wide {
                Wide::$wide(self as _)
            }
        }
        )*
    }
}

builtin! {
    u8 => Signed;
    i8 => Signed;
    u16 => Signed;
    i16 => Signed;
    u32 => Signed;
    i32 => Signed;
    u64 => Signed;
    i64 => Signed;
    usize => Signed;
    isize => Signed;
    i128 => Signed;
    u128 => Unsigned;
}

/// Compare two builtin integers of any types by value.
///
/// ```
/// use bounded::comparison::safe_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(safe_compare(-1i8, u128::MAX), Ordering::Less);
/// assert_eq!(safe_compare(255u8, -1i64), Ordering::Greater);
/// ```
#[inline]
pub fn safe_compare<L: Builtin, R: Builtin>(lhs: L, rhs: R) -> Ordering {
    lhs.wide().compare(rhs.wide())
}

/// Whether two builtin integers of any types have the same value.
#[inline]
pub fn safe_equal<L: Builtin, R: Builtin>(lhs: L, rhs: R) -> bool {
    safe_compare(lhs, rhs) == Ordering::Equal
}

/// The ordering of two values decided by their ranges alone, if any.
#[inline]
fn static_order<L: Bounded, R: Bounded>() -> Option<Ordering> {
    if L::MAX < R::MIN {
        Some(Ordering::Less)
    } else if L::MIN > R::MAX {
        Some(Ordering::Greater)
    } else if L::RANGE.is_single() && L::RANGE.same(R::RANGE) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Compare two bounded values.
///
/// Disjoint ranges, and two equal single value ranges, decide the result
/// without reading the values.
#[inline]
pub fn compare<L: Bounded, R: Bounded>(lhs: &L, rhs: &R) -> Ordering {
    match static_order::<L, R>() {
        Some(ordering) => ordering,
        None => lhs.get().cmp(&rhs.get()),
    }
}

/// Whether two bounded values are equal; see [`compare`].
#[inline]
pub fn equal<L: Bounded, R: Bounded>(lhs: &L, rhs: &R) -> bool {
    match static_order::<L, R>() {
        Some(ordering) => ordering == Ordering::Equal,
        None => lhs.get() == rhs.get(),
    }
}

impl<const L_MIN: i128, const L_MAX: i128, LS, LP, const R_MIN: i128, const R_MAX: i128, RS, RP>
    PartialEq<Integer<R_MIN, R_MAX, RS, RP>> for Integer<L_MIN, L_MAX, LS, LP>
    where LS: Storage,
          LP: Policy,
          RS: Storage,
          RP: Policy,
{
    #[inline]
    fn eq(&self, other: &Integer<R_MIN, R_MAX, RS, RP>) -> bool {
        equal(self, other)
    }
}

impl<const MIN: i128, const MAX: i128, S: Storage, P: Policy> Eq for Integer<MIN, MAX, S, P> { }

impl<const L_MIN: i128, const L_MAX: i128, LS, LP, const R_MIN: i128, const R_MAX: i128, RS, RP>
    PartialOrd<Integer<R_MIN, R_MAX, RS, RP>> for Integer<L_MIN, L_MAX, LS, LP>
    where LS: Storage,
          LP: Policy,
          RS: Storage,
          RP: Policy,
{
    #[inline]
    fn partial_cmp(&self, other: &Integer<R_MIN, R_MAX, RS, RP>) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl<const MIN: i128, const MAX: i128, S: Storage, P: Policy> Ord for Integer<MIN, MAX, S, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage().cmp(&other.storage())
    }
}

impl<const MIN: i128, const MAX: i128, S, P, const N: i128> PartialEq<Constant<N>> for Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    #[inline]
    fn eq(&self, other: &Constant<N>) -> bool {
        equal(self, other)
    }
}

impl<const MIN: i128, const MAX: i128, S, P, const N: i128> PartialOrd<Constant<N>> for Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    #[inline]
    fn partial_cmp(&self, other: &Constant<N>) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

macro_rules! builtin_comparisons {
    ($($t:ty)*) => {
        $(
        impl<const MIN: i128, const MAX: i128, S, P> PartialEq<$t> for Integer<MIN, MAX, S, P>
            where S: Storage,
                  P: Policy,
        {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                Wide::Signed(self.get()).compare(other.wide()) == Ordering::Equal
            }
        }

        impl<const MIN: i128, const MAX: i128, S, P> PartialEq<Integer<MIN, MAX, S, P>> for $t
            where S: Storage,
                  P: Policy,
        {
            #[inline]
            fn eq(&self, other: &Integer<MIN, MAX, S, P>) -> bool {
                other == self
            }
        }

        impl<const MIN: i128, const MAX: i128, S, P> PartialOrd<$t> for Integer<MIN, MAX, S, P>
            where S: Storage,
                  P: Policy,
        {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(Wide::Signed(self.get()).compare(other.wide()))
            }
        }

        impl<const MIN: i128, const MAX: i128, S, P> PartialOrd<Integer<MIN, MAX, S, P>> for $t
            where S: Storage,
                  P: Policy,
        {
            #[inline]
            fn partial_cmp(&self, other: &Integer<MIN, MAX, S, P>) -> Option<Ordering> {
                Some(self.wide().compare(Wide::Signed(other.get())))
            }
        }
        )*
    }
}

builtin_comparisons! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize i128 u128 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;
    use crate::policy::ThrowPolicy;

    #[test]
    fn signed_against_unsigned() {
        assert_eq!(safe_compare(-1i32, 0u32), Ordering::Less);
        assert_eq!(safe_compare(u64::MAX, i64::MIN), Ordering::Greater);
        assert_eq!(safe_compare(u128::MAX, u128::MAX), Ordering::Equal);
        assert_eq!(safe_compare(i128::MAX, u128::MAX), Ordering::Less);
        assert_eq!(safe_compare(i128::MAX as u128, i128::MAX), Ordering::Equal);
        assert!(safe_equal(200u8, 200i64));
        assert!(!safe_equal(-56i8, 200u8));
    }

    #[test]
    fn bounded_across_types() {
        let a = Integer::<0, 10, u8>::constant::<7>();
        let b = Integer::<-300, 300, i16, ThrowPolicy>::constant::<7>();
        let c = Integer::<5, 5, u8>::constant::<5>();
        assert_eq!(a, b);
        assert!(c < a);
        assert!(b > c);
        assert_eq!(c, constant::<5>());
        assert!(a < constant::<8>());
    }

    #[test]
    fn ranges_decide_disjoint_comparisons() {
        let low = Integer::<0, 9, u8>::constant::<9>();
        let high = Integer::<10, 20, u8>::constant::<10>();
        assert_eq!(compare(&low, &high), Ordering::Less);
        assert_eq!(compare(&high, &low), Ordering::Greater);
        assert!(!equal(&low, &high));
        assert!(equal(&constant::<3>(), &constant::<3>()));
        assert_eq!(compare(&constant::<3>(), &3u8), Ordering::Equal);
    }

    #[test]
    fn bounded_against_builtins() {
        let x = Integer::<-10, 10, i8>::constant::<-1>();
        assert!(x < 0u8);
        assert!(x < u128::MAX);
        assert!(x == -1i64);
        assert!(-1i64 == x);
        assert!(u128::MAX > x);
        assert!(5usize > x);
        assert!(x >= -1i8);
        assert_eq!(x.partial_cmp(&-2i32), Some(Ordering::Greater));
    }

    #[test]
    fn total_order_per_type() {
        let mut values = vec![
            Integer::<-5, 5, i8>::constant::<3>(),
            Integer::<-5, 5, i8>::constant::<-5>(),
            Integer::<-5, 5, i8>::constant::<0>(),
        ];
        values.sort();
        let sorted: Vec<i128> = values.iter().map(|x| x.get()).collect();
        assert_eq!(sorted, [-5, 0, 3]);
    }
}
