#![feature(test)]

extern crate test;
extern crate rand;

extern crate bounded;


use test::Bencher;
use test::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bounded::arith;
use bounded::policy::{ClampPolicy, ThrowPolicy};
use bounded::{Integer, Range};

type Percent = Integer<0, 100, u8, ClampPolicy>;
type Total = Integer<0, { 1 << 20 }, u32, ThrowPolicy>;

const LEN: usize = 1024;

fn test_data(n: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n).map(|_| rng.gen_range(0, 101)).collect()
}

#[bench]
fn sum_builtin(bench: &mut Bencher) {
    let xs = test_data(LEN);
    bench.iter(|| {
        let mut total = 0u32;
        for &x in &xs {
            total = total.checked_add(x as u32).unwrap();
        }
        total
    });
}

#[bench]
fn sum_bounded(bench: &mut Bencher) {
    let xs: Vec<Percent> = test_data(LEN).into_iter()
        .map(|x| Percent::try_new(x).unwrap())
        .collect();
    bench.iter(|| {
        let mut total = Total::constant::<0>();
        for &x in &xs {
            total.add_assign(x).unwrap();
        }
        total
    });
}

#[bench]
fn dot_bounded(bench: &mut Bencher) {
    let xs: Vec<Percent> = test_data(LEN).into_iter()
        .map(|x| Percent::try_new(x).unwrap())
        .collect();
    let ys = xs.clone();
    bench.iter(|| {
        let mut total = Integer::<0, { 1 << 24 }, u32, ThrowPolicy>::constant::<0>();
        for (&x, &y) in xs.iter().zip(&ys) {
            let product: Integer<0, 10000, u16, ClampPolicy> = x.mul(y);
            total.add_assign(product).unwrap();
        }
        total
    });
}

#[bench]
fn remainder_range(bench: &mut Bencher) {
    bench.iter(|| {
        arith::rem(black_box(Range::new(0, 1 << 40)), black_box(Range::new(1000, 5000)))
    });
}
