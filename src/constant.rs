use std::fmt;

use crate::integer_traits::Bounded;
use crate::policy::NullPolicy;

/// The compile-time constant `N`, as a zero sized integer with the range
/// `[N, N]`.
///
/// This is the tightest bounded integer for a known value; use it as an
/// operand where a builtin literal would bring the range of its whole type.
///
/// ```
/// use bounded::{constant, Integer};
///
/// let x = Integer::<0, 10, u8>::constant::<10>();
/// let r: Integer<0, 5, u8> = x.rem(constant::<6>());
/// assert_eq!(r, 4);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constant<const N: i128>;

/// Return the constant `N`.
#[inline]
pub const fn constant<const N: i128>() -> Constant<N> {
    Constant
}

impl<const N: i128> Constant<N> {
    pub const VALUE: i128 = N;

    #[inline]
    pub const fn value(self) -> i128 { N }
}

impl<const N: i128> Bounded for Constant<N> {
    const MIN: i128 = N;
    const MAX: i128 = N;
    type Policy = NullPolicy;

    #[inline]
    fn get(&self) -> i128 { N }
}

impl<const N: i128> fmt::Debug for Constant<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Constant({})", N)
    }
}

impl<const N: i128> fmt::Display for Constant<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn zero_sized_single_value() {
        assert_eq!(mem::size_of::<Constant<12345>>(), 0);
        assert_eq!(constant::<-3>().get(), -3);
        assert_eq!(<Constant<7> as Bounded>::RANGE, crate::Range::single(7));
        assert_eq!(format!("{:?}", constant::<5>()), "Constant(5)");
    }
}
