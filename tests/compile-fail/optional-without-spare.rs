extern crate bounded;

// error-pattern: the type has no spare representation for the empty state

use bounded::{Integer, Optional};

fn main() {
    let _ = Optional::<Integer<0, 255, u8>>::none();
}
