#![forbid(unsafe_code)]

//! Deterministic fingertip scripts.
//!
//! A [`Script`] is a precomputed sample stream: one `Option<Point>` per tick,
//! standing in for the camera/landmark pipeline. Scripts are built from three
//! segment kinds:
//!
//! - **dwell**: the fingertip rests on one position for N ticks;
//! - **glide**: the fingertip moves in a straight line between two positions,
//!   one interpolation step per tick;
//! - **gap**: no detection for N ticks.
//!
//! Builders resolve target labels to keypad centers through the layout
//! engine, so a script written as "dwell on '1', glide to '2'" tracks the
//! real geometry. Generation is pure: the same builder calls always produce
//! the same stream.

use wavelock_core::geometry::Point;
use wavelock_core::layout::{self, LockType, Target};

use crate::error::{HarnessError, Result};

/// A precomputed per-tick sample stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    samples: Vec<Option<Point>>,
}

impl Script {
    /// The samples, one per tick.
    #[must_use]
    pub fn samples(&self) -> &[Option<Point>] {
        &self.samples
    }

    /// Number of ticks in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the script has no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Builds a [`Script`] segment by segment against one lock type's layout.
#[derive(Debug, Clone)]
pub struct ScriptBuilder {
    lock_type: LockType,
    targets: Vec<Target>,
    samples: Vec<Option<Point>>,
}

impl ScriptBuilder {
    /// Start an empty script for the given lock type.
    #[must_use]
    pub fn new(lock_type: LockType) -> Self {
        Self {
            lock_type,
            targets: layout::generate(lock_type),
            samples: Vec::new(),
        }
    }

    /// Rest the fingertip on an arbitrary frame position for `ticks` ticks.
    #[must_use]
    pub fn dwell_at(mut self, point: Point, ticks: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(Some(point), ticks));
        self
    }

    /// Rest the fingertip on the center of the target labeled `label`.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnknownLabel`] if the layout has no such target.
    pub fn dwell_on(self, label: char, ticks: usize) -> Result<Self> {
        let center = self.center_of(label)?;
        Ok(self.dwell_at(center, ticks))
    }

    /// No detection for `ticks` ticks.
    #[must_use]
    pub fn gap(mut self, ticks: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(None, ticks));
        self
    }

    /// Move in a straight line from `from` to `to`, one sample per tick.
    ///
    /// The first sample is `from` and the last is `to` (a single-tick glide
    /// lands directly on `to`).
    #[must_use]
    pub fn glide(mut self, from: Point, to: Point, ticks: usize) -> Self {
        for step in 0..ticks {
            let alpha = if ticks > 1 {
                step as f32 / (ticks - 1) as f32
            } else {
                1.0
            };
            self.samples.push(Some(Point::new(
                from.x + (to.x - from.x) * alpha,
                from.y + (to.y - from.y) * alpha,
            )));
        }
        self
    }

    /// Dwell on each label of `entry` in order, gliding between consecutive
    /// targets. This is the shape of a real unlock attempt.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnknownLabel`] if any label has no target.
    pub fn entry_path(mut self, entry: &str, dwell_ticks: usize, travel_ticks: usize) -> Result<Self> {
        let mut previous: Option<Point> = None;
        for label in entry.chars() {
            let center = self.center_of(label)?;
            if let Some(from) = previous {
                self = self.glide(from, center, travel_ticks);
            }
            self = self.dwell_at(center, dwell_ticks);
            previous = Some(center);
        }
        Ok(self)
    }

    /// Finish the script.
    #[must_use]
    pub fn build(self) -> Script {
        Script {
            samples: self.samples,
        }
    }

    fn center_of(&self, label: char) -> Result<Point> {
        self.targets
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.center)
            .ok_or(HarnessError::UnknownLabel {
                lock_type: self.lock_type.name(),
                label,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{LockType, Point, ScriptBuilder};

    #[test]
    fn dwell_repeats_one_sample() {
        let script = ScriptBuilder::new(LockType::Number)
            .dwell_on('5', 4)
            .unwrap()
            .build();
        assert_eq!(script.len(), 4);
        assert_eq!(script.samples()[0], Some(Point::new(250.0, 200.0)));
        assert!(script.samples().iter().all(|s| *s == script.samples()[0]));
    }

    #[test]
    fn gap_produces_no_detections() {
        let script = ScriptBuilder::new(LockType::Number).gap(3).build();
        assert_eq!(script.samples(), &[None, None, None]);
    }

    #[test]
    fn glide_interpolates_endpoints_inclusive() {
        let script = ScriptBuilder::new(LockType::Number)
            .glide(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 5)
            .build();
        assert_eq!(script.samples()[0], Some(Point::new(0.0, 0.0)));
        assert_eq!(script.samples()[2], Some(Point::new(50.0, 0.0)));
        assert_eq!(script.samples()[4], Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn single_tick_glide_lands_on_destination() {
        let script = ScriptBuilder::new(LockType::Number)
            .glide(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1)
            .build();
        assert_eq!(script.samples(), &[Some(Point::new(100.0, 0.0))]);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(ScriptBuilder::new(LockType::Number).dwell_on('0', 1).is_err());
        // The pattern layout has no targets at all.
        assert!(ScriptBuilder::new(LockType::Pattern).dwell_on('1', 1).is_err());
    }

    #[test]
    fn entry_path_is_deterministic() {
        let build = || {
            ScriptBuilder::new(LockType::Number)
                .entry_path("159", 3, 2)
                .unwrap()
                .build()
        };
        assert_eq!(build(), build());
        // 3 dwells of 3 ticks + 2 glides of 2 ticks.
        assert_eq!(build().len(), 13);
    }
}
