//! Common type resolution.
//!
//! The common type of several bounded integers holds every value of each
//! of them: its range is the hull of theirs, its policy follows the
//! [common policy rule](../policy/enum.PolicyKind.html#method.common) and
//! its width class is the narrower one.

use crate::integer::Integer;
use crate::integer_traits::Bounded;
use crate::policy::{Common, CommonPolicy, PolicyKind};
use crate::range::Range;
use crate::storage::{Layout, Storage, Width};

/// The range, policy and width class of a bounded integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
    range: Range,
    policy: PolicyKind,
    width: Width,
}

impl Descriptor {
    #[inline]
    pub const fn new(range: Range, policy: PolicyKind, width: Width) -> Self {
        Descriptor { range, policy, width }
    }

    #[inline]
    pub const fn range(&self) -> Range { self.range }

    #[inline]
    pub const fn policy(&self) -> PolicyKind { self.policy }

    #[inline]
    pub const fn width(&self) -> Width { self.width }

    /// The storage the width class picks for the range.
    #[inline]
    pub const fn layout(&self) -> Layout {
        self.width.select(self.range)
    }

    /// The common type of `self` and `other`.
    pub const fn common(self, other: Descriptor) -> Descriptor {
        Descriptor {
            range: self.range.hull(other.range),
            policy: self.policy.common(other.policy),
            width: self.width.common(other.width),
        }
    }
}

/// The common type of every descriptor in `types`, folded from the left,
/// or `None` for an empty slice.
///
/// ```
/// use bounded::Integer;
/// use bounded::common::common_of;
/// use bounded::policy::ClampPolicy;
/// use bounded::{Range, Width};
///
/// const COMMON: Option<bounded::common::Descriptor> = common_of(&[
///     Integer::<0, 10, u8>::DESCRIPTOR,
///     Integer::<-5, 3, i32, ClampPolicy>::DESCRIPTOR,
///     Integer::<7, 300, u16>::DESCRIPTOR,
/// ]);
/// let common = COMMON.unwrap();
/// assert_eq!(common.range(), Range::new(-5, 300));
/// assert_eq!(common.width(), Width::Least);
/// ```
pub const fn common_of(types: &[Descriptor]) -> Option<Descriptor> {
    if types.is_empty() {
        return None;
    }
    let mut acc = types[0];
    let mut i = 1;
    while i < types.len() {
        acc = acc.common(types[i]);
        i += 1;
    }
    Some(acc)
}

/// Convert `lhs` and `rhs` to their common type, whose range the caller
/// names.
///
/// A named range other than the hull of both ranges is a compile error.
pub fn unify<L, R, const C_MIN: i128, const C_MAX: i128, T>(lhs: L, rhs: R)
    -> (Integer<C_MIN, C_MAX, T, Common<L::Policy, R::Policy>>,
        Integer<C_MIN, C_MAX, T, Common<L::Policy, R::Policy>>)
    where L: Bounded,
          R: Bounded,
          T: Storage,
          (L::Policy, R::Policy): CommonPolicy,
{
    const {
        if !L::RANGE.hull(R::RANGE).same(Range::new(C_MIN, C_MAX)) {
            panic!("the declared range is not the common range");
        }
    }
    (Integer::new(lhs), Integer::new(rhs))
}
