//! Drag-by-pointer positioning for chat windows.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Window position plus the pointer offset captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    position: Point,
    offset: Option<Point>,
}

impl DragState {
    /// A window resting at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            offset: None,
        }
    }

    /// Current top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the pointer is captured.
    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }

    /// Captures the pointer relative to the window's top-left.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.offset = Some(pointer - self.position);
    }

    /// Moves the window under the pointer while captured.
    ///
    /// Returns `true` if the position changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(offset) = self.offset else {
            return false;
        };
        let next = pointer - offset;
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// Releases the pointer.
    pub fn pointer_up(&mut self) {
        self.offset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_without_capture_is_ignored() {
        let mut drag = DragState::new(Point::new(10.0, 20.0));

        assert!(!drag.pointer_move(Point::new(300.0, 300.0)));
        assert_eq!(drag.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut drag = DragState::new(Point::new(100.0, 100.0));

        drag.pointer_down(Point::new(110.0, 105.0));
        assert!(drag.is_dragging());

        assert!(drag.pointer_move(Point::new(210.0, 155.0)));
        assert_eq!(drag.position(), Point::new(200.0, 150.0));

        drag.pointer_up();
        assert!(!drag.is_dragging());
        assert!(!drag.pointer_move(Point::new(0.0, 0.0)));
        assert_eq!(drag.position(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_same_pointer_reports_no_move() {
        let mut drag = DragState::new(Point::new(0.0, 0.0));
        drag.pointer_down(Point::new(5.0, 5.0));

        assert!(!drag.pointer_move(Point::new(5.0, 5.0)));
    }

    proptest! {
        /// Property: position is always pointer minus the captured offset
        #[test]
        fn prop_position_is_pointer_minus_offset(
            start_x in -500i32..500,
            start_y in -500i32..500,
            grab_x in 0i32..400,
            grab_y in 0i32..30,
            moves in proptest::collection::vec((-1000i32..1000, -1000i32..1000), 1..20)
        ) {
            let start = Point::new(f64::from(start_x), f64::from(start_y));
            let mut drag = DragState::new(start);
            drag.pointer_down(Point::new(start.x + f64::from(grab_x), start.y + f64::from(grab_y)));

            for (x, y) in moves {
                drag.pointer_move(Point::new(f64::from(x), f64::from(y)));
                prop_assert_eq!(
                    drag.position(),
                    Point::new(f64::from(x - grab_x), f64::from(y - grab_y))
                );
            }
        }
    }
}
