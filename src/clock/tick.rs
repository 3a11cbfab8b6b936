//! Injected time sources for the clock face.
//!
//! The formatter stays pure; these types decide *when* it runs and *which*
//! instant it sees, so tests never wait on the wall clock.

use chrono::{DateTime, FixedOffset, Local};

use super::{ClockFormatter, ClockSnapshot};
use crate::error::{check_elapsed, Result, SceneError};
use crate::traits::InstantSource;

/// Wall-clock time in the machine's local zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl InstantSource for SystemTime {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedInstant(pub DateTime<FixedOffset>);

impl InstantSource for FixedInstant {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Fires once per interval from accumulated frame deltas.
///
/// The first update always fires so the label is filled on frame one. The
/// remainder carries over between ticks, so no drift builds up.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: f32,
    accumulator: f32,
    primed: bool,
}

impl TickTimer {
    pub fn new(interval: f32) -> Result<Self> {
        if interval > 0.0 && interval.is_finite() {
            Ok(Self {
                interval,
                accumulator: 0.0,
                primed: false,
            })
        } else {
            Err(SceneError::InvalidTickInterval(interval))
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Returns true when a tick is due.
    pub fn tick(&mut self, delta: f32) -> Result<bool> {
        check_elapsed(delta)?;

        if !self.primed {
            self.primed = true;
            return Ok(true);
        }

        self.accumulator += delta;
        if self.accumulator >= self.interval {
            // A long stall yields one tick, not a burst of stale ones.
            self.accumulator %= self.interval;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Fraction of the interval elapsed since the last tick
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.interval
    }
}

/// Keeps the clock-face labels current.
pub struct ClockDisplay {
    timer: TickTimer,
    formatter: ClockFormatter,
    latest: Option<ClockSnapshot>,
}

impl ClockDisplay {
    pub fn new(formatter: ClockFormatter, interval: f32) -> Result<Self> {
        Ok(Self {
            timer: TickTimer::new(interval)?,
            formatter,
            latest: None,
        })
    }

    /// Returns a fresh snapshot when the timer fires, `None` otherwise.
    pub fn update(&mut self, delta: f32, source: &dyn InstantSource) -> Result<Option<ClockSnapshot>> {
        if !self.timer.tick(delta)? {
            return Ok(None);
        }

        let snapshot = self.formatter.format(&source.now());
        log::trace!("clock tick: {}", snapshot);
        self.latest = Some(snapshot.clone());
        Ok(Some(snapshot))
    }

    pub fn latest(&self) -> Option<&ClockSnapshot> {
        self.latest.as_ref()
    }

    pub fn formatter(&self) -> &ClockFormatter {
        &self.formatter
    }
}
