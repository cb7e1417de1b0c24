//! Least and greatest values.

use crate::integer::Integer;
use crate::integer_traits::Bounded;
use crate::policy::{Common, CommonPolicy};
use crate::range::Range;
use crate::storage::Storage;

#[inline]
const fn lesser(a: i128, b: i128) -> i128 { if a < b { a } else { b } }

#[inline]
const fn greater(a: i128, b: i128) -> i128 { if a > b { a } else { b } }

/// The lesser of `lhs` and `rhs`, or `lhs` if they are equal.
///
/// The range of the result is the lesser bound of each side, and must be
/// named by the caller. When the ranges do not overlap, the result is
/// picked without comparing the values.
///
/// ```
/// use bounded::{min, Integer};
///
/// let a = Integer::<0, 10, u8>::constant::<7>();
/// let b = Integer::<3, 20, u8>::constant::<4>();
/// let m: Integer<0, 10, u8> = min(a, b);
/// assert_eq!(m, 4);
/// ```
pub fn min<L, R, const M_MIN: i128, const M_MAX: i128, T>(lhs: L, rhs: R)
    -> Integer<M_MIN, M_MAX, T, Common<L::Policy, R::Policy>>
    where L: Bounded,
          R: Bounded,
          T: Storage,
          (L::Policy, R::Policy): CommonPolicy,
{
    const {
        let range = Range::new(lesser(L::MIN, R::MIN), lesser(L::MAX, R::MAX));
        if !range.same(Range::new(M_MIN, M_MAX)) {
            panic!("the declared range is not the range of the minimum");
        }
    }
    let value = if L::MAX <= R::MIN {
        lhs.get()
    } else if R::MAX < L::MIN {
        rhs.get()
    } else {
        let (a, b) = (lhs.get(), rhs.get());
        if b < a { b } else { a }
    };
    Integer::trusted(value)
}

/// The greater of `lhs` and `rhs`, or `lhs` if they are equal.
///
/// The range of the result is the greater bound of each side; see [`min`].
pub fn max<L, R, const M_MIN: i128, const M_MAX: i128, T>(lhs: L, rhs: R)
    -> Integer<M_MIN, M_MAX, T, Common<L::Policy, R::Policy>>
    where L: Bounded,
          R: Bounded,
          T: Storage,
          (L::Policy, R::Policy): CommonPolicy,
{
    const {
        let range = Range::new(greater(L::MIN, R::MIN), greater(L::MAX, R::MAX));
        if !range.same(Range::new(M_MIN, M_MAX)) {
            panic!("the declared range is not the range of the maximum");
        }
    }
    let value = if L::MIN >= R::MAX {
        lhs.get()
    } else if R::MIN > L::MAX {
        rhs.get()
    } else {
        let (a, b) = (lhs.get(), rhs.get());
        if b > a { b } else { a }
    };
    Integer::trusted(value)
}

/// The first of `values` that no later value comes `before`.
///
/// With `|a, b| a < b` this is the first least value, with `|a, b| a > b`
/// the first greatest. Returns `None` for no values.
pub fn extreme<I, F>(values: I, mut before: F) -> Option<I::Item>
    where I: IntoIterator,
          F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = values.into_iter();
    let mut best = iter.next()?;
    for value in iter {
        if before(&value, &best) {
            best = value;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;
    use crate::policy::{ClampPolicy, ThrowPolicy};

    #[test]
    fn overlapping_ranges_compare_values() {
        let a = Integer::<-5, 10, i8>::constant::<-2>();
        let b = Integer::<0, 20, u8>::constant::<6>();
        let lo: Integer<-5, 10, i8> = min(a, b);
        let hi: Integer<0, 20, u8> = max(a, b);
        assert_eq!(lo, -2);
        assert_eq!(hi, 6);
    }

    #[test]
    fn disjoint_ranges_pick_statically() {
        let low = Integer::<0, 4, u8>::constant::<4>();
        let high = Integer::<5, 9, u8>::constant::<5>();
        let lo: Integer<0, 4, u8> = min(high, low);
        let hi: Integer<5, 9, u8> = max(low, high);
        assert_eq!(lo, 4);
        assert_eq!(hi, 5);
    }

    #[test]
    fn builtins_and_constants() {
        let m: Integer<-128, 3, i8> = min(constant::<3>(), -7i8);
        assert_eq!(m, -7);
        let c = Integer::<0, 10, u8, ClampPolicy>::constant::<9>();
        let t = Integer::<0, 10, u8, ThrowPolicy>::constant::<2>();
        let _: Integer<0, 10, u8> = max(c, t);
        let m: Integer<2, 10, u8, ClampPolicy> = max(c, constant::<2>());
        assert_eq!(m, 9);
    }

    #[test]
    fn extreme_keeps_first_of_equals() {
        let pairs = [(3, 'a'), (1, 'b'), (4, 'c'), (1, 'd'), (4, 'e')];
        assert_eq!(extreme(pairs.iter(), |x, y| x.0 < y.0), Some(&(1, 'b')));
        assert_eq!(extreme(pairs.iter(), |x, y| x.0 > y.0), Some(&(4, 'c')));
        assert_eq!(extreme(Vec::<u8>::new(), |x, y| x < y), None);
    }
}
