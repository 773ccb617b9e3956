//! Inner attributes at the top of a deprecated body stay inside it.

use sunset::deprecated_fn;

#[deprecated_fn("use `double_v2`")]
#[inline]
fn double(x: i32) -> i32 {
    #![allow(clippy::let_and_return)]
    let doubled = x * 2;
    doubled
}

struct App;

impl App {
    #[deprecated_fn("use `App::run`")]
    fn main(&self) -> u8 {
        #![allow(unused_variables)]
        let unused = 0;
        1
    }
}

fn main() {
    assert_eq!(double(4), 8);
    assert_eq!(App.main(), 1);
}
