extern crate bounded;

// error-pattern: shift amount may be negative

use bounded::Integer;

fn main() {
    let x = Integer::<0, 4, u8>::constant::<1>();
    let _: Integer<0, 0, u8> = x.shl(-1i8);
}
