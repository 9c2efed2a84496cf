#![forbid(unsafe_code)]

//! Keypad layout: maps a lock type to a deterministic set of hit-testable
//! targets inside the 640x480 reference frame.
//!
//! [`generate`] is a pure function of the [`LockType`]: two calls with the
//! same input always yield identical geometry, labels, and ordering. Callers
//! own the returned targets for the lifetime of one unlock session and
//! regenerate them when the lock type changes.

use crate::geometry::{Point, Rect};

/// X coordinate of the top-left grid point, in frame pixels.
const GRID_ORIGIN_X: f32 = 150.0;
/// Y coordinate of the top-left grid point, in frame pixels.
const GRID_ORIGIN_Y: f32 = 100.0;
/// Center-to-center spacing between adjacent grid points.
const GRID_SPACING: f32 = 100.0;
/// Hit-test extent of a numeric target, in pixels from its center.
const TARGET_EXTENT: f32 = 40.0;

/// The kind of lock a session presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockType {
    /// 3x3 numeric keypad, digits 1-9.
    Number,
    /// Reserved: swipe-pattern grid. Produces no targets yet; a session with
    /// this lock type can never progress past `Continue`.
    Pattern,
}

impl LockType {
    /// Human-readable name for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for LockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An interactive on-screen control.
///
/// Hit testing is circular: a fingertip touches the target when its Euclidean
/// distance from `center` is strictly less than `extent`. The drawn shape is
/// the square [`bounds`](Target::bounds), so the touchable region is the
/// inscribed circle of the visible box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Center of the target in frame pixels.
    pub center: Point,
    /// Hit-test radius and half-width of the drawn box.
    pub extent: f32,
    /// The value this target contributes to the entered sequence.
    pub label: char,
}

impl Target {
    /// Create a new target.
    #[must_use]
    pub const fn new(center: Point, extent: f32, label: char) -> Self {
        Self {
            center,
            extent,
            label,
        }
    }

    /// Whether a fingertip position touches this target (strict inequality:
    /// a point exactly `extent` away is a miss).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) < self.extent
    }

    /// The square outline a renderer draws for this target.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.center, self.extent)
    }
}

/// Generate the target set for a lock type.
///
/// `Number` yields exactly 9 targets in row-major order, labeled '1'..'9'.
/// `Pattern` yields an empty set; callers must treat that as "no interaction
/// possible" rather than an error.
/// Find the touched target: the first target in `targets` order whose
/// region contains `point`. When regions overlap, the earlier target wins.
#[must_use]
pub fn hit_test(targets: &[Target], point: Point) -> Option<char> {
    targets
        .iter()
        .find(|target| target.contains(point))
        .map(|target| target.label)
}

#[must_use]
pub fn generate(lock_type: LockType) -> Vec<Target> {
    match lock_type {
        LockType::Number => (0..9u32)
            .map(|i| {
                let col = (i % 3) as f32;
                let row = (i / 3) as f32;
                let center = Point::new(
                    GRID_ORIGIN_X + col * GRID_SPACING,
                    GRID_ORIGIN_Y + row * GRID_SPACING,
                );
                // '1' + i is safe: i < 9 keeps the label in '1'..='9'.
                let label = char::from(b'1' + i as u8);
                Target::new(center, TARGET_EXTENT, label)
            })
            .collect(),
        LockType::Pattern => Vec::new(),
    }
}
