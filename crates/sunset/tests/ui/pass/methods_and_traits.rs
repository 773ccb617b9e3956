//! Inherent and trait impl methods can be deprecated.

use sunset::deprecated_fn;

trait Shape {
    fn area(&self) -> f64;
}

struct Square(f64);

impl Square {
    #[deprecated_fn("use `Square::side`", severity = "pending-removal")]
    pub fn width(&self) -> f64 {
        self.0
    }
}

impl Shape for Square {
    #[deprecated_fn("use `Shape::surface`", severity = "future-change")]
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

fn main() {
    let square = Square(3.0);
    assert!((square.width() - 3.0).abs() < f64::EPSILON);
    assert!((square.area() - 9.0).abs() < f64::EPSILON);
}
