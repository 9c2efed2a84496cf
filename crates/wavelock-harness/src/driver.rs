#![forbid(unsafe_code)]

//! Scripted session driver.
//!
//! [`Driver::run`] feeds a [`Script`] tick by tick into a fresh [`Session`]
//! and records everything into a [`Transcript`]: per-tick sample, outcome,
//! and buffer depth. The transcript serializes to JSONL for offline
//! inspection.
//!
//! # JSONL Schema
//!
//! ```json
//! {"event":"run_start","lock_type":"number","secret_len":4,"ticks":42}
//! {"event":"tick","idx":0,"sample":{"x":150.0,"y":100.0},"outcome":"Continue","entered":1}
//! {"event":"run_complete","unlocked":true,"denied_attempts":0,"unlock_tick":18}
//! ```

use std::io::Write;

use serde::Serialize;
use tracing::debug;
use wavelock_core::geometry::Point;
use wavelock_core::{LockConfig, Outcome, Session};

use crate::error::Result;
use crate::script::Script;

/// One tick of a recorded run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    /// Tick index, starting at 0.
    pub idx: usize,
    /// The fingertip sample fed in (`null` for a detection gap).
    pub sample: Option<Point>,
    /// Outcome the session reported.
    pub outcome: Outcome,
    /// Entry buffer depth after the tick.
    pub entered: usize,
}

/// Full record of one scripted run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    lock_type: &'static str,
    secret_len: usize,
    ticks: Vec<TickRecord>,
}

impl Transcript {
    /// Per-tick records in order.
    #[must_use]
    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    /// Tick index of the first `Unlocked` outcome, if any.
    #[must_use]
    pub fn unlock_tick(&self) -> Option<usize> {
        self.ticks
            .iter()
            .find(|t| t.outcome == Outcome::Unlocked)
            .map(|t| t.idx)
    }

    /// Whether the run ended unlocked.
    #[must_use]
    pub fn unlocked(&self) -> bool {
        self.unlock_tick().is_some()
    }

    /// Number of full-length attempts that were denied.
    #[must_use]
    pub fn denied_attempts(&self) -> usize {
        self.ticks
            .iter()
            .filter(|t| t.outcome == Outcome::Denied)
            .count()
    }

    /// Write the transcript as JSONL: a `run_start` line, one `tick` line per
    /// tick, and a `run_complete` line.
    ///
    /// # Errors
    ///
    /// Propagates serialization and write failures.
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<()> {
        #[derive(Serialize)]
        struct RunStart<'a> {
            event: &'a str,
            lock_type: &'a str,
            secret_len: usize,
            ticks: usize,
        }
        #[derive(Serialize)]
        struct TickLine<'a> {
            event: &'a str,
            #[serde(flatten)]
            record: &'a TickRecord,
        }
        #[derive(Serialize)]
        struct RunComplete<'a> {
            event: &'a str,
            unlocked: bool,
            denied_attempts: usize,
            unlock_tick: Option<usize>,
        }

        serde_json::to_writer(
            &mut writer,
            &RunStart {
                event: "run_start",
                lock_type: self.lock_type,
                secret_len: self.secret_len,
                ticks: self.ticks.len(),
            },
        )?;
        writeln!(writer)?;
        for record in &self.ticks {
            serde_json::to_writer(
                &mut writer,
                &TickLine {
                    event: "tick",
                    record,
                },
            )?;
            writeln!(writer)?;
        }
        serde_json::to_writer(
            &mut writer,
            &RunComplete {
                event: "run_complete",
                unlocked: self.unlocked(),
                denied_attempts: self.denied_attempts(),
                unlock_tick: self.unlock_tick(),
            },
        )?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Runs scripts against sessions built from one configuration.
#[derive(Debug, Clone)]
pub struct Driver {
    config: LockConfig,
}

impl Driver {
    /// Create a driver for a validated configuration.
    #[must_use]
    pub const fn new(config: LockConfig) -> Self {
        Self { config }
    }

    /// Run a script through a fresh session, one sample per tick.
    #[must_use]
    pub fn run(&self, script: &Script) -> Transcript {
        let mut session = Session::new(&self.config);
        let mut ticks = Vec::with_capacity(script.len());
        for (idx, sample) in script.samples().iter().enumerate() {
            let outcome = session.tick(*sample);
            ticks.push(TickRecord {
                idx,
                sample: *sample,
                outcome,
                entered: session.entered().len(),
            });
        }
        debug!(
            ticks = ticks.len(),
            unlocked = session.is_unlocked(),
            "scripted run complete"
        );
        Transcript {
            lock_type: self.config.lock_type().name(),
            secret_len: self.config.secret_len(),
            ticks,
        }
    }
}
