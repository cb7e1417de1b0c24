use std::fmt;

/// The provable minimum and maximum of some integer quantity.
///
/// `Range` is a plain value; all of its methods are `const fn` so that the
/// range of a type can be computed and checked during compilation.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    min: i128,
    max: i128,
}

impl Range {
    /// The range of every value an `i128` can hold.
    pub const FULL: Range = Range { min: i128::MIN, max: i128::MAX };

    /// Create the range `[min, max]`.
    ///
    /// ***Panics*** if `min > max`; in a const context this is a compile
    /// error.
    #[inline]
    pub const fn new(min: i128, max: i128) -> Self {
        if min > max {
            panic!("range is inverted: minimum is greater than maximum");
        }
        Range { min, max }
    }

    /// The range `[value, value]`.
    #[inline]
    pub const fn single(value: i128) -> Self {
        Range { min: value, max: value }
    }

    #[inline]
    pub const fn min(&self) -> i128 { self.min }

    #[inline]
    pub const fn max(&self) -> i128 { self.max }

    /// Return `true` if the range holds exactly one value.
    #[inline]
    pub const fn is_single(&self) -> bool { self.min == self.max }

    /// Return `true` if `value` lies in the range.
    #[inline]
    pub const fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }

    /// Return `true` if every value of `other` is also in `self`.
    #[inline]
    pub const fn includes(&self, other: Range) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Return `true` if at least one value lies in both ranges.
    #[inline]
    pub const fn overlaps(&self, other: Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Return `true` if the two ranges are the same pair.
    ///
    /// `PartialEq` is not usable in const fns, this is.
    #[inline]
    pub const fn same(&self, other: Range) -> bool {
        self.min == other.min && self.max == other.max
    }

    /// The smallest range covering both `self` and `other`.
    #[inline]
    pub const fn hull(&self, other: Range) -> Range {
        Range {
            min: if self.min < other.min { self.min } else { other.min },
            max: if self.max > other.max { self.max } else { other.max },
        }
    }

    /// The values common to both ranges, if any.
    pub const fn intersection(&self, other: Range) -> Option<Range> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Range {
            min: if self.min > other.min { self.min } else { other.min },
            max: if self.max < other.max { self.max } else { other.max },
        })
    }

    /// The number of values in the range, minus one.
    ///
    /// This is the span that fits in a `u128` even for `Range::FULL`.
    #[inline]
    pub const fn span(&self) -> u128 {
        self.max.wrapping_sub(self.min) as u128
    }

    /// Nearest value of the range to `value`.
    #[inline]
    pub const fn clamp(&self, value: i128) -> i128 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
