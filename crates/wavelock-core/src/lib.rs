#![forbid(unsafe_code)]

//! Core: keypad layout, lock configuration, and the gesture-input session.
//!
//! # Role in wavelock
//! `wavelock-core` is the decision layer. It owns the target layout for each
//! lock type, configuration validation, and the per-tick state machine that
//! turns fingertip samples into an unlock decision.
//!
//! # Primary responsibilities
//! - **Layout**: deterministic target geometry per [`layout::LockType`].
//! - **LockConfig**: validated secret + lock type, rejected before a session starts.
//! - **Session**: the tick-driven state machine producing [`session::Outcome`]s.
//! - **Overlay**: pure draw geometry (target boxes, fingertip marker) for renderers.
//!
//! # How it fits in the system
//! The camera/landmark pipeline (external) feeds one fingertip sample per
//! frame into [`session::Session::tick`]. The renderer (external) consumes
//! [`overlay::shapes`]. The core performs no I/O and holds no globals, so it
//! is driven identically by a camera loop or by a scripted harness.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod overlay;
pub mod session;

pub use config::LockConfig;
pub use error::ConfigError;
pub use geometry::Point;
pub use layout::{LockType, Target};
pub use session::{Outcome, Session};
