use crate::policy::{NullPolicy, Policy};
use crate::range::Range;

/// An integer-like value whose range is known statically.
///
/// Implemented by every [`Integer`](struct.Integer.html), by
/// [`Constant`](struct.Constant.html), and by the builtin integers except
/// `u128`, whose range does not fit the `i128` bounds. A builtin carries
/// the range of every value of its type and the null policy.
pub trait Bounded: Copy {
    const MIN: i128;
    const MAX: i128;
    const RANGE: Range = Range::new(Self::MIN, Self::MAX);

    type Policy: Policy;

    /// The value, widened to `i128`.
    fn get(&self) -> i128;
}

macro_rules! builtin_bounded {
    ($($t:ty)*) => {
        $(
        impl Bounded for $t {
            const MIN: i128 = <$t>::MIN as i128;
            const MAX: i128 = <$t>::MAX as i128;
            type Policy = NullPolicy;

            #[inline]
            fn get(&self) -> i128 {
                *self as i128
            }
        }
        )*
    }
}

builtin_bounded! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize i128 }

#[cfg(test)]
mod tests {
    use super::*;

    fn range_of<T: Bounded>(_: T) -> Range { T::RANGE }

    #[test]
    fn builtin_ranges() {
        assert_eq!(range_of(0u8), Range::new(0, 255));
        assert_eq!(range_of(0i16), Range::new(-32768, 32767));
        assert_eq!(range_of(0i128), Range::FULL);
        assert_eq!((-7i32).get(), -7);
    }
}
