#![forbid(unsafe_code)]

//! Gesture-input session: transforms per-tick fingertip samples into an
//! unlock decision.
//!
//! [`Session`] is a stateful processor. The driving loop calls
//! [`tick`](Session::tick) once per video frame with the tracked fingertip
//! position (or `None` when no hand was detected) and acts on the returned
//! [`Outcome`].
//!
//! # State Machine
//!
//! Each tick runs three phases:
//!
//! - **Hit test**: the first target (in layout order) whose circular region
//!   contains the sample is the touched target; no sample or no hit means no
//!   touched target this tick.
//! - **Debounce / append**: a label is appended only when a target is touched
//!   and its label differs from the most recently appended label (or the
//!   buffer is empty). The debounce key is the *last appended label*, not
//!   touch edges: losing detection, or leaving and re-entering the same
//!   target, does not re-arm it. Only touching a different target does.
//! - **Evaluation**: runs only immediately after an append. An exact match
//!   against the secret unlocks; a full-length mismatch denies and clears the
//!   buffer for the next attempt; anything shorter continues.
//!
//! # Invariants
//!
//! 1. `entered().len() <= secret.len()` after every tick.
//! 2. Sustained contact with one target appends at most once.
//! 3. After `Unlocked`, the session is terminal: state no longer changes and
//!    every further tick reports `Unlocked`.
//! 4. `Denied` always leaves the buffer empty.
//!
//! # Failure Modes
//!
//! - A lock type with no targets (the reserved pattern lock) never touches
//!   anything, so the session reports `Continue` forever. Callers should
//!   check [`has_targets`](Session::has_targets) up front and surface a
//!   usability message instead of waiting.
//! - There is no attempt counter, lockout, or backoff: a denied attempt
//!   simply resets the buffer and the user tries again.

use tracing::{debug, info};

use crate::config::LockConfig;
use crate::geometry::Point;
use crate::layout::{self, Target};

/// Per-tick result of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Still accumulating input.
    Continue,
    /// The entered sequence matched the secret. Terminal; the caller
    /// dispatches the single "open the protected document" action.
    Unlocked,
    /// A full-length sequence mismatched. The buffer has been cleared and a
    /// new attempt begins on subsequent ticks.
    Denied,
}

/// Transient state for one unlock attempt sequence.
///
/// Owns its target set and entry buffer exclusively; the buffer is mutated
/// only through [`tick`](Session::tick), never by rendering or I/O code.
#[derive(Debug, Clone)]
pub struct Session {
    targets: Vec<Target>,
    secret: Vec<char>,
    entered: Vec<char>,
    unlocked: bool,
}

impl Session {
    /// Create a session for a validated configuration.
    ///
    /// The target set is generated here from the configured lock type and is
    /// fixed for the session's lifetime.
    #[must_use]
    pub fn new(config: &LockConfig) -> Self {
        Self {
            targets: layout::generate(config.lock_type()),
            secret: config.secret().to_vec(),
            entered: Vec::with_capacity(config.secret_len()),
            unlocked: false,
        }
    }

    /// Process one fingertip sample.
    ///
    /// `None` means the detector produced no fingertip this frame; that is a
    /// normal detection gap, not an error, and leaves all state untouched.
    pub fn tick(&mut self, fingertip: Option<Point>) -> Outcome {
        if self.unlocked {
            return Outcome::Unlocked;
        }

        let Some(touched) = self.hit_test(fingertip) else {
            return Outcome::Continue;
        };

        // Debounce on the last appended label: a finger resting on a button
        // appends once, but the same label may re-enter the sequence after
        // any different label.
        if self.entered.last() == Some(&touched) {
            return Outcome::Continue;
        }
        if self.entered.len() >= self.secret.len() {
            return Outcome::Continue;
        }

        self.entered.push(touched);
        debug!(label = %touched, entered = self.entered.len(), "label appended");

        if self.entered == self.secret {
            self.unlocked = true;
            info!("secret matched, session unlocked");
            return Outcome::Unlocked;
        }
        if self.entered.len() == self.secret.len() {
            debug!("full-length mismatch, entry buffer reset");
            self.entered.clear();
            return Outcome::Denied;
        }
        Outcome::Continue
    }

    /// Labels accumulated toward the current attempt, oldest first.
    #[must_use]
    pub fn entered(&self) -> &[char] {
        &self.entered
    }

    /// The session's target set, in hit-test order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Whether this session has any interactive targets. `false` means no
    /// input can ever progress (reserved pattern lock).
    #[must_use]
    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Whether a prior tick reported [`Outcome::Unlocked`].
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Discard all attempt state, returning the session to its initial idle
    /// state with the same configuration.
    pub fn reset(&mut self) {
        self.entered.clear();
        self.unlocked = false;
    }

    fn hit_test(&self, fingertip: Option<Point>) -> Option<char> {
        layout::hit_test(&self.targets, fingertip?)
    }
}
