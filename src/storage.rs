//! Underlying storage of bounded integers.
//!
//! The storage of `Integer<MIN, MAX, S, P>` is the builtin type `S`, and
//! `S` must be the type that a storage [`Width`] class picks for the range
//! `[MIN, MAX]`. Which class a type uses is up to the type definition;
//! the storage itself is then fixed by the range.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt};

use crate::range::Range;

/// Bit width and signedness of a builtin integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    bits: u32,
    signed: bool,
}

impl Layout {
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Self {
        Layout { bits, signed }
    }

    #[inline]
    pub const fn bits(&self) -> u32 { self.bits }

    #[inline]
    pub const fn is_signed(&self) -> bool { self.signed }

    /// Least value of the layout.
    pub const fn min(&self) -> i128 {
        if self.signed { -1 << (self.bits - 1) } else { 0 }
    }

    /// Greatest value of the layout.
    pub const fn max(&self) -> i128 {
        if self.signed {
            i128::MAX >> (128 - self.bits)
        } else {
            ((1u128 << self.bits) - 1) as i128
        }
    }

    /// Every value of the layout.
    #[inline]
    pub const fn range(&self) -> Range {
        Range::new(self.min(), self.max())
    }

    #[inline]
    pub const fn same(&self, other: Layout) -> bool {
        self.bits == other.bits && self.signed == other.signed
    }
}

const UNSIGNED: [Layout; 4] = [
    Layout::new(8, false),
    Layout::new(16, false),
    Layout::new(32, false),
    Layout::new(64, false),
];

const SIGNED: [Layout; 5] = [
    Layout::new(8, true),
    Layout::new(16, true),
    Layout::new(32, true),
    Layout::new(64, true),
    Layout::new(128, true),
];

/// Storage width class.
///
/// `Least` picks the narrowest builtin that holds a range. `Fast` picks the
/// narrowest builtin of at least 32 bits, which every supported target
/// handles at native register speed.
///
/// Non-negative ranges use unsigned storage while one exists (up to `u64`),
/// all other ranges use signed storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    Least,
    Fast,
}

impl Width {
    const fn floor(self) -> u32 {
        match self {
            Width::Least => 8,
            Width::Fast => 32,
        }
    }

    /// The storage layout this class picks for `range`.
    pub const fn select(self, range: Range) -> Layout {
        let floor = self.floor();
        if range.min() >= 0 {
            let mut i = 0;
            while i < UNSIGNED.len() {
                let layout = UNSIGNED[i];
                if layout.bits >= floor && range.max() <= layout.max() {
                    return layout;
                }
                i += 1;
            }
        }
        let mut i = 0;
        while i < SIGNED.len() {
            let layout = SIGNED[i];
            if layout.bits >= floor && layout.range().includes(range) {
                return layout;
            }
            i += 1;
        }
        SIGNED[SIGNED.len() - 1]
    }

    /// The class that picks `layout` for `range`, preferring `Least` when
    /// both do.
    pub const fn of(layout: Layout, range: Range) -> Option<Width> {
        if Width::Least.select(range).same(layout) {
            Some(Width::Least)
        } else if Width::Fast.select(range).same(layout) {
            Some(Width::Fast)
        } else {
            None
        }
    }

    /// The narrower of two classes.
    pub const fn common(self, other: Width) -> Width {
        match (self, other) {
            (Width::Fast, Width::Fast) => Width::Fast,
            _ => Width::Least,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A builtin integer usable as the storage of a bounded integer.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`
/// and `i128`. All of them widen losslessly into `i128`.
pub trait Storage: PrimInt + AsPrimitive<i128> + Hash + Debug + Display
    + Send + Sync + 'static + sealed::Sealed
{
    const LAYOUT: Layout;

    /// Convert from `i128`, truncating to the storage width.
    fn from_i128(value: i128) -> Self;

    #[inline]
    fn widen(self) -> i128 {
        self.as_()
    }
}

macro_rules! storage {
    ($($t:ty => $signed:expr;)*) => {
        $(
        impl sealed::Sealed for $t {}

        impl Storage for $t {
            const LAYOUT: Layout = Layout::new(<$t>::BITS, $signed);

            #[inline]
            fn from_i128(value: i128) -> Self {
                AsPrimitive::<$t>::as_(value)
            }
        }
        )*
    }
}

storage! {
    u8 => false;
    i8 => true;
    u16 => false;
    i16 => true;
    u32 => false;
    i32 => true;
    u64 => false;
    i64 => true;
    i128 => true;
}
