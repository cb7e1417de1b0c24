extern crate bounded;

// error-pattern: division is not defined for a divisor of zero

use bounded::{constant, Integer};

fn main() {
    let x = Integer::<0, 10, u8>::constant::<3>();
    let _: Integer<0, 0, u8> = x.div(constant::<0>());
}
