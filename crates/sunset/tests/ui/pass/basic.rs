//! A deprecated free function keeps working and still type-checks as a `fn`.

use sunset::deprecated_fn;

/// Adds two numbers.
#[deprecated_fn("use new_api() instead", since = "0.4")]
pub fn old_api(x: i32, y: i32) -> i32 {
    x + y
}

fn main() {
    let as_pointer: fn(i32, i32) -> i32 = old_api;
    assert_eq!(as_pointer(1, 2), 3);
    assert_eq!(old_api(2, 2), 4);
}
