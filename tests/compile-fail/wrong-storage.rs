extern crate bounded;

// error-pattern: the storage type is not the one a width class picks for this range

use bounded::Integer;

fn main() {
    let _ = Integer::<0, 4, u16>::constant::<1>();
}
