//! Geometric primitives for floor plan layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate on the canvas
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle (a placed room)
//!
//! # Coordinate System
//!
//! Layouts use the same coordinate system as SVG and raster images:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The grid engine may place rooms at negative coordinates (left of or above
//! the start room); renderers are responsible for what ends up visible.

/// A 2D point on the canvas.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::Point;
/// let a = Point::new(10.0, 20.0);
/// let b = Point::new(5.0, 5.0);
///
/// let sum = a.add_point(b);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// assert_eq!(a.sub_point(b).hypot(), 5.0f32.hypot(15.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean length of the point taken as a vector
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns true when both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a canvas region
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum coordinates.
///
/// Rooms placed by the grid engine are `Bounds` whose top-left corner is the
/// room position.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::{Bounds, Point, Size};
/// let kitchen = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 133.0));
/// let hall = Bounds::new_from_top_left(Point::new(100.0, 0.0), Size::new(100.0, 133.0));
///
/// // Rooms sharing a wall do not overlap
/// assert!(!kitchen.intersects(&hall));
///
/// let floor = kitchen.merge(&hall);
/// assert_eq!(floor.width(), 200.0);
/// assert_eq!(floor.height(), 133.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest bounds containing both `self` and `other`
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true when the interiors of the two rectangles overlap.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}
