#![forbid(unsafe_code)]

//! Geometric primitives.

/// Width of the reference video frame in pixels.
pub const FRAME_WIDTH: f32 = 640.0;
/// Height of the reference video frame in pixels.
pub const FRAME_HEIGHT: f32 = 480.0;

/// A 2D pixel position in the 640x480 reference frame (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether the point lies inside the reference frame.
    #[must_use]
    pub fn in_frame(self) -> bool {
        self.x >= 0.0 && self.x < FRAME_WIDTH && self.y >= 0.0 && self.y < FRAME_HEIGHT
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in frame pixels, for overlay geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rectangle centered on a point with the given half-width.
    #[must_use]
    pub fn centered_square(center: Point, half_width: f32) -> Self {
        Self {
            x: center.x - half_width,
            y: center.y - half_width,
            width: half_width * 2.0,
            height: half_width * 2.0,
        }
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
