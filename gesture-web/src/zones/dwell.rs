//! Zone dwell detection
//!
//! Idle → Pending(zone, since) → Confirmed(zone) → Idle on exit.
//!
//! Entering a zone starts a dwell and hands back a `DwellTimer` for the
//! caller to schedule. Every state change bumps an epoch, so a timer that
//! fires after the pointer left (or left and came back) no longer matches
//! and is ignored.

use super::layout::{Zone, ZoneId};
use crate::pointer::ScreenPoint;

/// Continuous time inside a zone before it counts as a selection
pub const DWELL_THRESHOLD_MS: f64 = 800.0;

/// Where the detector is in the current dwell episode
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DwellPhase {
    Idle,
    Pending { zone: ZoneId, since_ms: f64 },
    /// Already confirmed; stays here until the pointer leaves the zone
    Confirmed { zone: ZoneId },
}

/// Deferred confirmation for one dwell episode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DwellTimer {
    pub zone: ZoneId,
    pub epoch: u64,
    pub due_ms: f64,
}

/// Result of hit-testing one pointer position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DwellEvent {
    Unchanged,
    /// A new dwell started; schedule the timer
    Started(DwellTimer),
    /// A pending dwell was abandoned before the threshold
    Cancelled(ZoneId),
    /// The pointer left a zone that was already confirmed
    Exited(ZoneId),
}

pub struct DwellDetector {
    phase: DwellPhase,
    epoch: u64,
    threshold_ms: f64,
}

impl DwellDetector {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            phase: DwellPhase::Idle,
            epoch: 0,
            threshold_ms: threshold_ms.max(0.0),
        }
    }

    /// First zone (in priority order) containing the pointer
    pub fn hit_test(pointer: ScreenPoint, zones: &[Zone<'_>]) -> Option<ZoneId> {
        zones.iter().find(|z| z.contains(pointer)).map(|z| z.id)
    }

    /// Update with the pointer position for this frame
    pub fn check(&mut self, pointer: ScreenPoint, zones: &[Zone<'_>], now_ms: f64) -> DwellEvent {
        let hit = Self::hit_test(pointer, zones);

        match (hit, self.phase) {
            (None, DwellPhase::Idle) => DwellEvent::Unchanged,
            (None, DwellPhase::Pending { zone, since_ms }) => {
                log::debug!(
                    "dwell on {} cancelled after {:.0}ms",
                    zone.name(),
                    now_ms - since_ms
                );
                self.enter_idle();
                DwellEvent::Cancelled(zone)
            }
            (None, DwellPhase::Confirmed { zone }) => {
                self.enter_idle();
                DwellEvent::Exited(zone)
            }
            (Some(id), DwellPhase::Pending { zone, .. }) if id == zone => DwellEvent::Unchanged,
            (Some(id), DwellPhase::Confirmed { zone }) if id == zone => DwellEvent::Unchanged,
            (Some(id), _) => {
                self.epoch += 1;
                self.phase = DwellPhase::Pending { zone: id, since_ms: now_ms };
                log::debug!("dwell on {} started", id.name());
                DwellEvent::Started(DwellTimer {
                    zone: id,
                    epoch: self.epoch,
                    due_ms: now_ms + self.threshold_ms,
                })
            }
        }
    }

    /// Fire a scheduled timer
    ///
    /// Confirms only if the timer still belongs to the current episode and
    /// its deadline has been reached. The deadline is compared as stored,
    /// never re-derived from the start time, so a timer popped at `due_ms`
    /// always confirms. Returns the confirmed zone.
    pub fn confirm(&mut self, timer: DwellTimer, now_ms: f64) -> Option<ZoneId> {
        if timer.epoch != self.epoch || now_ms < timer.due_ms {
            return None;
        }
        match self.phase {
            DwellPhase::Pending { zone, .. } if zone == timer.zone => {
                self.phase = DwellPhase::Confirmed { zone };
                Some(zone)
            }
            _ => None,
        }
    }

    /// Gesture lost: drop any dwell in progress
    pub fn release(&mut self) {
        if self.phase != DwellPhase::Idle {
            self.enter_idle();
        }
    }

    fn enter_idle(&mut self) {
        self.epoch += 1;
        self.phase = DwellPhase::Idle;
    }

    pub fn phase(&self) -> DwellPhase {
        self.phase
    }

    pub fn pending_zone(&self) -> Option<ZoneId> {
        match self.phase {
            DwellPhase::Pending { zone, .. } => Some(zone),
            _ => None,
        }
    }

    pub fn pending_since(&self) -> Option<f64> {
        match self.phase {
            DwellPhase::Pending { since_ms, .. } => Some(since_ms),
            _ => None,
        }
    }

    pub fn active_zone(&self) -> Option<ZoneId> {
        match self.phase {
            DwellPhase::Confirmed { zone } => Some(zone),
            _ => None,
        }
    }

    /// Zone the pointer currently rests in, pending or confirmed
    pub fn current_zone(&self) -> Option<ZoneId> {
        match self.phase {
            DwellPhase::Idle => None,
            DwellPhase::Pending { zone, .. } | DwellPhase::Confirmed { zone } => Some(zone),
        }
    }

    pub fn reset(&mut self) {
        self.enter_idle();
    }
}

impl Default for DwellDetector {
    fn default() -> Self {
        Self::new(DWELL_THRESHOLD_MS)
    }
}
