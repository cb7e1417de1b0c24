//! Range arithmetic.
//!
//! Each function takes the ranges of the operands and returns the smallest
//! range that contains the result of the operation for every pair of values
//! drawn from those ranges. Every bound returned here is attained by some
//! pair of operands.
//!
//! The functions are `const fn` and are evaluated while compiling the
//! operations of [`Integer`](../struct.Integer.html). A result that does not
//! fit in an `i128`, a divisor range of exactly zero, or a possibly negative
//! shift amount panics, which in const evaluation is a compile error.

use crate::range::Range;

/// Upper limit on the number of candidate divisors examined by the
/// remainder search before it settles for a wider bound.
pub const REMAINDER_SEARCH_LIMIT: u32 = 1 << 12;

macro_rules! exact {
    ($e:expr, $op:literal) => {
        match $e {
            Some(value) => value,
            None => panic!(concat!("the range of `", $op, "` does not fit in an i128")),
        }
    };
}

#[inline]
const fn min2(a: i128, b: i128) -> i128 { if a < b { a } else { b } }

#[inline]
const fn max2(a: i128, b: i128) -> i128 { if a > b { a } else { b } }

#[inline]
const fn corners(p: [i128; 4]) -> Range {
    Range::new(
        min2(min2(p[0], p[1]), min2(p[2], p[3])),
        max2(max2(p[0], p[1]), max2(p[2], p[3])),
    )
}

/// `lhs + rhs`
pub const fn add(lhs: Range, rhs: Range) -> Range {
    Range::new(
        exact!(lhs.min().checked_add(rhs.min()), "+"),
        exact!(lhs.max().checked_add(rhs.max()), "+"),
    )
}

/// `lhs - rhs`
pub const fn sub(lhs: Range, rhs: Range) -> Range {
    Range::new(
        exact!(lhs.min().checked_sub(rhs.max()), "-"),
        exact!(lhs.max().checked_sub(rhs.min()), "-"),
    )
}

/// `lhs * rhs`
///
/// The product is bilinear, so its extremes over the rectangle of operands
/// lie on the corners.
pub const fn mul(lhs: Range, rhs: Range) -> Range {
    corners([
        exact!(lhs.min().checked_mul(rhs.min()), "*"),
        exact!(lhs.min().checked_mul(rhs.max()), "*"),
        exact!(lhs.max().checked_mul(rhs.min()), "*"),
        exact!(lhs.max().checked_mul(rhs.max()), "*"),
    ])
}

/// Fold the quotients of both dividend extremes by `divisor` into `acc`.
const fn quotients(lhs: Range, divisor: i128, acc: (i128, i128)) -> (i128, i128) {
    let a = exact!(lhs.min().checked_div(divisor), "/");
    let b = exact!(lhs.max().checked_div(divisor), "/");
    (min2(acc.0, min2(a, b)), max2(acc.1, max2(a, b)))
}

/// `lhs / rhs`, truncating toward zero.
///
/// The divisor range is split at zero. Within one sign the quotient is
/// monotonic in the divisor, so the candidates are the ends of each signed
/// part: this includes the least positive and the greatest negative divisor
/// whenever zero lies inside the range.
pub const fn div(lhs: Range, rhs: Range) -> Range {
    if rhs.min() == 0 && rhs.max() == 0 {
        panic!("division is not defined for a divisor of zero");
    }
    let mut acc = (i128::MAX, i128::MIN);
    if rhs.min() < 0 {
        acc = quotients(lhs, rhs.min(), acc);
        acc = quotients(lhs, min2(rhs.max(), -1), acc);
    }
    if rhs.max() > 0 {
        acc = quotients(lhs, max2(rhs.min(), 1), acc);
        acc = quotients(lhs, rhs.max(), acc);
    }
    Range::new(acc.0, acc.1)
}

/// Magnitudes `[p, q]` of the non-zero divisors in `rhs`.
const fn divisor_magnitudes(rhs: Range) -> (u128, u128) {
    if rhs.min() > 0 {
        (rhs.min() as u128, rhs.max() as u128)
    } else if rhs.max() < 0 {
        (rhs.max().unsigned_abs(), rhs.min().unsigned_abs())
    } else {
        let below = rhs.min().unsigned_abs();
        let above = rhs.max() as u128;
        (1, if below > above { below } else { above })
    }
}

/// Greatest `n % m` for `n` in `[u, v]`, `m` in `[p, q]`, `1 <= p`.
const fn greatest_remainder(u: u128, v: u128, p: u128, q: u128) -> u128 {
    // A divisor beyond every dividend leaves the dividend untouched.
    if q > v {
        return v;
    }
    let mut best = 0;
    let mut m = q;
    let mut budget = REMAINDER_SEARCH_LIMIT;
    loop {
        // When a multiple of `m` lies in `(u, v]`, the value just below it
        // reaches the largest residue `m - 1`.
        let candidate = if u / m != v / m { m - 1 } else { v % m };
        if candidate > best {
            best = candidate;
        }
        // Every smaller divisor leaves at most `m - 2`.
        if m <= p || best + 2 >= m {
            return best;
        }
        if budget == 0 {
            return if best > m - 2 { best } else { m - 2 };
        }
        m -= 1;
        budget -= 1;
    }
}

/// Least `n % m` for `n` in `[u, v]`, `m` in `[p, q]`, `1 <= p`.
const fn least_remainder(u: u128, v: u128, p: u128, q: u128) -> u128 {
    if u == 0 {
        return 0;
    }
    // A divisor equal to a dividend.
    if p <= v && u <= q {
        return 0;
    }
    if p > v {
        return u;
    }
    // Here every divisor is below every dividend.
    let mut best = u;
    let mut m = p;
    let mut budget = REMAINDER_SEARCH_LIMIT;
    while m <= q {
        let candidate = if u / m != v / m { 0 } else { u % m };
        if candidate < best {
            best = candidate;
        }
        if best == 0 {
            return 0;
        }
        if budget == 0 {
            return 0;
        }
        m += 1;
        budget -= 1;
    }
    best
}

/// `lhs % rhs`, with the sign of the dividend.
///
/// The search works on magnitudes, so the dividend `i128::MIN` is never
/// negated. The negative and the non-negative dividends are handled apart
/// and the hull of both parts is returned.
pub const fn rem(lhs: Range, rhs: Range) -> Range {
    if rhs.min() == 0 && rhs.max() == 0 {
        panic!("modulo is not defined for a divisor of zero");
    }
    let (p, q) = divisor_magnitudes(rhs);
    let mut result: Option<Range> = None;
    if lhs.min() < 0 {
        let u = min2(lhs.max(), -1).unsigned_abs();
        let v = lhs.min().unsigned_abs();
        let least = least_remainder(u, v, p, q) as i128;
        let greatest = greatest_remainder(u, v, p, q) as i128;
        result = Some(Range::new(-greatest, -least));
    }
    if lhs.max() >= 0 {
        let u = max2(lhs.min(), 0) as u128;
        let v = lhs.max() as u128;
        let part = Range::new(
            least_remainder(u, v, p, q) as i128,
            greatest_remainder(u, v, p, q) as i128,
        );
        result = match result {
            Some(negative) => Some(negative.hull(part)),
            None => Some(part),
        };
    }
    match result {
        Some(range) => range,
        None => panic!("empty dividend range"),
    }
}

const fn shifted_left(value: i128, amount: i128) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    if amount > 127 {
        return None;
    }
    // 2^127 itself overflows, but -1 << 127 is i128::MIN.
    if amount == 127 {
        return if value == -1 { Some(i128::MIN) } else { None };
    }
    match 2i128.checked_pow(amount as u32) {
        Some(factor) => value.checked_mul(factor),
        None => None,
    }
}

pub(crate) const fn shifted_right(value: i128, amount: i128) -> i128 {
    if amount >= 127 {
        if value < 0 { -1 } else { 0 }
    } else {
        value >> amount
    }
}

/// `lhs << rhs`, as multiplication by a power of two.
pub const fn shl(lhs: Range, rhs: Range) -> Range {
    if rhs.min() < 0 {
        panic!("shift amount may be negative");
    }
    corners([
        exact!(shifted_left(lhs.min(), rhs.min()), "<<"),
        exact!(shifted_left(lhs.min(), rhs.max()), "<<"),
        exact!(shifted_left(lhs.max(), rhs.min()), "<<"),
        exact!(shifted_left(lhs.max(), rhs.max()), "<<"),
    ])
}

/// `lhs >> rhs`, an arithmetic shift that rounds toward negative infinity.
pub const fn shr(lhs: Range, rhs: Range) -> Range {
    if rhs.min() < 0 {
        panic!("shift amount may be negative");
    }
    corners([
        shifted_right(lhs.min(), rhs.min()),
        shifted_right(lhs.min(), rhs.max()),
        shifted_right(lhs.max(), rhs.min()),
        shifted_right(lhs.max(), rhs.max()),
    ])
}

/// `-value`
pub const fn neg(value: Range) -> Range {
    Range::new(
        exact!(value.max().checked_neg(), "-"),
        exact!(value.min().checked_neg(), "-"),
    )
}

/// `|value|`
pub const fn abs(value: Range) -> Range {
    if value.min() >= 0 {
        value
    } else if value.max() <= 0 {
        neg(value)
    } else {
        let below = exact!(value.min().checked_neg(), "abs");
        Range::new(0, max2(below, value.max()))
    }
}
