extern crate bounded;

// error-pattern: the source range is not contained in the target range

use bounded::Integer;

fn main() {
    let _ = Integer::<0, 10, u8>::new(7u16);
}
