extern crate bounded;
#[macro_use]
extern crate quickcheck;
extern crate rand;

use bounded::arith;
use bounded::comparison::safe_compare;
use bounded::policy::{PolicyKind, ThrowPolicy, WrapPolicy};
use bounded::{constant, Integer, Optional, Policy, Range, Tombstone};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


#[test]
fn sum_of_mixed_ranges() {
    let x = Integer::<1, 10, u8>::constant::<9>();
    let z = Integer::<-3, 11, i8>::constant::<4>();
    let sum: Integer<-2, 21, i8> = x.add(z);
    assert_eq!(sum, 13);
    let product: Integer<-30, 110, i8> = x.mul(z);
    assert_eq!(product, 36);
}

#[test]
fn remainder_by_literal() {
    let x = Integer::<0, 10, u8>::constant::<10>();
    let r: Integer<0, 10, u8> = x.rem(6);
    assert_eq!(r, 4);
}

#[test]
fn spare_representations_of_small_range() {
    type T = Integer<0, 4, u8>;
    assert_eq!(T::SPARE_REPRESENTATIONS, 251);
    assert_eq!(T::make(0).get(), 5);
}

#[test]
fn spare_round_trip() {
    fn check<T: Tombstone>() {
        for i in 0..T::SPARE_REPRESENTATIONS.min(1 << 12) {
            assert_eq!(T::make(i).index(), Some(i));
        }
    }
    check::<Integer<0, 4, u8>>();
    check::<Integer<-100, 100, i8>>();
    check::<Integer<1, 1000, u16>>();
    check::<Integer<-7, 7, i32>>();
    check::<Optional<Integer<3, 9, u8>>>();
}

#[test]
fn common_policy_rule() {
    let all = [PolicyKind::Null, PolicyKind::Clamp, PolicyKind::Throw, PolicyKind::Wrap];
    for &p in &all {
        assert_eq!(p.common(p), p);
        assert_eq!(PolicyKind::Null.common(p), p);
        assert_eq!(p.common(PolicyKind::Null), p);
    }
    assert_eq!(PolicyKind::Throw.common(PolicyKind::Clamp), PolicyKind::Null);
}

/// Exact range of `op` over all pairs, skipping undefined results.
fn enumerate<F>(lhs: Range, rhs: Range, op: F) -> Range
    where F: Fn(i128, i128) -> Option<i128>
{
    let mut values = Vec::new();
    for x in lhs.min()..=lhs.max() {
        for y in rhs.min()..=rhs.max() {
            values.extend(op(x, y));
        }
    }
    let lo = values.iter().cloned().min().unwrap();
    let hi = values.iter().cloned().max().unwrap();
    Range::new(lo, hi)
}

fn random_range<R: Rng>(rng: &mut R, lo: i128, hi: i128) -> Range {
    let a = rng.gen_range(lo, hi);
    let b = rng.gen_range(lo, hi);
    Range::new(a.min(b), a.max(b))
}

#[test]
fn range_rules_are_tight() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..400 {
        let a = random_range(&mut rng, -40, 41);
        let b = random_range(&mut rng, -40, 41);
        assert_eq!(arith::add(a, b), enumerate(a, b, |x, y| Some(x + y)));
        assert_eq!(arith::sub(a, b), enumerate(a, b, |x, y| Some(x - y)));
        assert_eq!(arith::mul(a, b), enumerate(a, b, |x, y| Some(x * y)));
        if b != Range::single(0) {
            assert_eq!(arith::div(a, b),
                       enumerate(a, b, |x, y| if y == 0 { None } else { Some(x / y) }),
                       "{:?} / {:?}", a, b);
            assert_eq!(arith::rem(a, b),
                       enumerate(a, b, |x, y| if y == 0 { None } else { Some(x % y) }),
                       "{:?} % {:?}", a, b);
        }
        let s = random_range(&mut rng, 0, 9);
        assert_eq!(arith::shl(a, s), enumerate(a, s, |x, y| Some(x << y)));
        assert_eq!(arith::shr(a, s), enumerate(a, s, |x, y| Some(x >> y)));
    }
}

#[test]
fn remainder_of_wide_dividends() {
    let dividends = Range::new(-50, 49);
    let divisors = Range::new(-54, -6);
    let exact = enumerate(dividends, divisors, |x, y| Some(x % y));
    assert_eq!(arith::rem(dividends, divisors), exact);
    assert_eq!(exact, Range::new(-50, 49));
}

#[test]
fn throw_policy_in_a_computation() {
    type Percent = Integer<0, 100, u8, ThrowPolicy>;
    let mut total = Percent::constant::<90>();
    assert!(total.add_assign(constant::<5>()).is_ok());
    let err = total.add_assign(constant::<10>()).unwrap_err();
    assert_eq!(err.to_string(), "got a value of 105 but expected a value in the range [0, 100]");
    assert_eq!(total, 95);
}

quickcheck! {
    fn qc_add_is_exact(a: i8, b: i8) -> bool {
        let x = Integer::<-128, 127, i8>::new(a);
        let sum: Integer<-256, 254, i16> = x.add(b);
        sum.get() == a as i128 + b as i128
    }

    fn qc_mul_is_exact(a: i16, b: i16) -> bool {
        let x = Integer::<-32768, 32767, i16>::new(a);
        let product: Integer<-1073709056, 1073741824, i32> = x.mul(b);
        product.get() == a as i128 * b as i128
    }

    fn qc_rem_sign_follows_dividend(a: i16, b: i8) -> bool {
        let x = Integer::<-32768, 32767, i16>::new(a);
        if b == 0 {
            return true;
        }
        let r: Integer<-127, 127, i8> = x.rem(b);
        r.get() == a as i128 % b as i128 && (r.get() == 0 || (r.get() < 0) == (a < 0))
    }

    fn qc_wrap_stays_in_range(value: i64) -> bool {
        let range = Range::new(-7, 12);
        let wrapped = WrapPolicy::assign(value as i128, range).unwrap();
        range.contains(wrapped) && (wrapped - value as i128).rem_euclid(20) == 0
    }

    fn qc_safe_compare(a: i64, b: u64) -> bool {
        safe_compare(a, b) == (a as i128).cmp(&(b as i128))
            && safe_compare(b, a) == (b as i128).cmp(&(a as i128))
    }

    fn qc_compare_with_builtins(a: i8, b: u32) -> bool {
        let x = Integer::<-128, 127, i8>::new(a);
        (x < b) == ((a as i128) < b as i128) && (x == b) == (a as i128 == b as i128)
    }

    fn qc_try_new_throws_outside(value: i32) -> bool {
        let x = Integer::<-1000, 1000, i16, ThrowPolicy>::try_new(value);
        match x {
            Ok(x) => x == value,
            Err(err) => err.value() == value as i128 && !(-1000..=1000).contains(&value),
        }
    }
}
