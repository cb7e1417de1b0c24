extern crate bounded;

// error-pattern: the source range and the target range do not overlap

use bounded::{constant, Integer};

fn main() {
    let _ = Integer::<0, 10, u8>::try_new(constant::<20>());
}
