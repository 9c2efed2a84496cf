#![forbid(unsafe_code)]

//! Overlay geometry: pure draw data for whatever renders the unlock view.
//!
//! The core never draws. It hands the renderer a flat list of shapes derived
//! from the current target set and fingertip sample: one outlined box with a
//! label per target, plus a filled dot when a fingertip is tracked.

use crate::geometry::{Point, Rect};
use crate::layout::Target;

/// Radius of the fingertip marker, in frame pixels.
pub const FINGERTIP_RADIUS: f32 = 10.0;

/// One drawable element of the unlock view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayShape {
    /// Outlined square with the target's label centered in it.
    TargetBox { rect: Rect, label: char },
    /// Filled circle marking the tracked fingertip.
    FingertipDot { center: Point, radius: f32 },
}

/// Build the overlay for one frame: every target's box in layout order,
/// then the fingertip dot if a sample is present.
#[must_use]
pub fn shapes(targets: &[Target], fingertip: Option<Point>) -> Vec<OverlayShape> {
    let mut out = Vec::with_capacity(targets.len() + 1);
    for target in targets {
        out.push(OverlayShape::TargetBox {
            rect: target.bounds(),
            label: target.label,
        });
    }
    if let Some(center) = fingertip {
        out.push(OverlayShape::FingertipDot {
            center,
            radius: FINGERTIP_RADIUS,
        });
    }
    out
}
