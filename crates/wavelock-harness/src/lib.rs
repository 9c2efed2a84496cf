#![forbid(unsafe_code)]

//! Test harness for wavelock: deterministic fingertip scripts and a scripted
//! session driver.
//!
//! The camera/landmark pipeline is replaced by synthetic sample streams, so
//! unlock behavior can be exercised tick-for-tick without any video input.
//! [`script`] builds the streams, [`driver`] runs them against a session and
//! records a JSONL-emittable transcript.

pub mod cli;
pub mod driver;
pub mod error;
pub mod script;

pub use driver::{Driver, TickRecord, Transcript};
pub use error::{HarnessError, Result};
pub use script::{Script, ScriptBuilder};
