extern crate bounded;

// error-pattern: the declared range of the result is not the computed range

use bounded::Integer;

fn main() {
    let x = Integer::<1, 10, u8>::constant::<9>();
    let z = Integer::<-3, 11, i8>::constant::<4>();
    let _: Integer<-2, 20, i8> = x.add(z);
}
