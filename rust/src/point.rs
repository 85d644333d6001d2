//! Geometry primitives

use serde::Serialize;

/// A 2D point with fixed-width integer coordinates.
///
/// Laid out like a C struct: `x` first, then `y`, both 32-bit.
#[repr(C)]
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// x coordinate
    pub x: i32,
    /// y coordinate
    pub y: i32,
}

/// Operations on `Point`
impl Point {
    /// Create a new Point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place.
    pub fn init(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Translate in place. Overflow wraps regardless of build profile.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Field access by element index: 0 is `x`, 1 is `y`.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut i32> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            _ => None,
        }
    }
}

/// Free function form of [`Point::init`]
pub fn initialize(point: &mut Point, x: i32, y: i32) {
    point.init(x, y);
}

/// Free function form of [`Point::move_by`]
pub fn move_by(point: &mut Point, dx: i32, dy: i32) {
    point.move_by(dx, dy);
}

/// Store the same value through every element index.
pub fn store_both(point: &mut Point, value: i32) {
    for index in 0..2 {
        if let Some(field) = point.field_mut(index) {
            *field = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_overwrites_previous_values() {
        let mut p = Point { x: 128, y: 65536 };
        initialize(&mut p, 16, 32);
        assert_eq!(p, Point::new(16, 32));
    }

    #[test]
    fn init_accepts_extremes() {
        let mut p = Point::default();
        for (x, y) in [(i32::MIN, i32::MAX), (-1, -7), (0, 0), (i32::MAX, i32::MIN)] {
            initialize(&mut p, x, y);
            assert_eq!((p.x, p.y), (x, y));
        }
    }

    #[test]
    fn move_wraps_on_overflow() {
        let mut p = Point::new(i32::MAX, i32::MIN);
        move_by(&mut p, 1, -1);
        assert_eq!(p, Point::new(i32::MIN, i32::MAX));

        let mut q = Point::new(-5, 5);
        q.move_by(i32::MIN, i32::MAX);
        assert_eq!(q, Point::new((-5i32).wrapping_add(i32::MIN), 5i32.wrapping_add(i32::MAX)));
    }

    #[test]
    fn zero_move_is_noop() {
        let mut p = Point::default();
        initialize(&mut p, -42, 1000);
        let before = p;
        move_by(&mut p, 0, 0);
        assert_eq!(p, before);
    }

    #[test]
    fn points_do_not_alias() {
        let mut a = Point::new(1, 2);
        let b = a;
        let mut c = Point::new(1, 2);
        a.move_by(10, 10);
        c.init(-3, -4);
        assert_eq!(b, Point::new(1, 2));
        assert_eq!(a, Point::new(11, 12));
        assert_eq!(c, Point::new(-3, -4));
    }

    #[test]
    fn field_index_access() {
        let mut p = Point::default();
        store_both(&mut p, 16);
        assert_eq!(p, Point::new(16, 16));
        *p.field_mut(1).unwrap() = 7;
        assert_eq!(p.y, 7);
        assert!(p.field_mut(2).is_none());
    }
}
