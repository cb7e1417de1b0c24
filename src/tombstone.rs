//! Spare representations.
//!
//! A bounded integer whose range is narrower than its storage has bit
//! patterns that no valid value uses. Wrappers such as
//! [`Optional`](../struct.Optional.html) store their own states in them
//! instead of adding a discriminant.

use crate::constant::Constant;
use crate::integer::Integer;
use crate::policy::Policy;
use crate::storage::Storage;

/// A type with spare representations.
///
/// Spare representations are numbered `0..SPARE_REPRESENTATIONS`, and for
/// every index `i` in that range `T::make(i).index() == Some(i)`.
pub trait Tombstone: Sized {
    /// Number of spare representations.
    const SPARE_REPRESENTATIONS: u128;

    /// The spare representation with number `index`.
    ///
    /// ***Panics*** if `index` is not less than `SPARE_REPRESENTATIONS`.
    fn make(index: u128) -> Self;

    /// The number of the spare representation `self` is, or `None` for an
    /// ordinary value.
    fn index(&self) -> Option<u128>;
}

impl<const MIN: i128, const MAX: i128, S, P> Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    const SPARE_BELOW: u128 = if MIN == MAX {
        0
    } else {
        (MIN as u128).wrapping_sub(S::LAYOUT.min() as u128)
    };

    const SPARE_ABOVE: u128 = if MIN == MAX {
        0
    } else {
        (S::LAYOUT.max() as u128).wrapping_sub(MAX as u128)
    };
}

impl<const MIN: i128, const MAX: i128, S, P> Tombstone for Integer<MIN, MAX, S, P>
    where S: Storage,
          P: Policy,
{
    const SPARE_REPRESENTATIONS: u128 = Self::SPARE_BELOW + Self::SPARE_ABOVE;

    fn make(index: u128) -> Self {
        assert!(index < Self::SPARE_REPRESENTATIONS,
                "spare representation {} out of bounds for {} spares",
                index, Self::SPARE_REPRESENTATIONS);
        let raw = if index < Self::SPARE_BELOW {
            (S::LAYOUT.min() as u128).wrapping_add(index)
        } else {
            (MAX as u128).wrapping_add(index - Self::SPARE_BELOW + 1)
        };
        Self::from_storage_unchecked(S::from_i128(raw as i128))
    }

    fn index(&self) -> Option<u128> {
        if Self::SPARE_REPRESENTATIONS == 0 {
            return None;
        }
        let raw = self.get();
        if raw < MIN {
            Some((raw as u128).wrapping_sub(S::LAYOUT.min() as u128))
        } else if raw > MAX {
            Some((raw as u128).wrapping_sub(MAX as u128) - 1 + Self::SPARE_BELOW)
        } else {
            None
        }
    }
}

/// Every state a constant can be in is its value.
impl<const N: i128> Tombstone for Constant<N> {
    const SPARE_REPRESENTATIONS: u128 = 0;

    fn make(index: u128) -> Self {
        panic!("spare representation {} out of bounds for a constant", index)
    }

    #[inline]
    fn index(&self) -> Option<u128> {
        None
    }
}

macro_rules! builtin_tombstone {
    ($($t:ty)*) => {
        $(
        impl Tombstone for $t {
            const SPARE_REPRESENTATIONS: u128 = 0;

            fn make(index: u128) -> Self {
                panic!("spare representation {} out of bounds for {}",
                       index, stringify!($t))
            }

            #[inline]
            fn index(&self) -> Option<u128> {
                None
            }
        }
        )*
    }
}

builtin_tombstone! { u8 i8 u16 i16 u32 i32 u64 i64 u128 i128 usize isize }
