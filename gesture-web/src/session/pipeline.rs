//! Gesture session - one pass per landmark frame
//!
//! Motion filter → dwell detector → action dispatcher, plus the timer
//! queue that turns dwell starts into deferred confirmations. All cross-frame
//! state lives here; the caller owns the session.

use super::config::SessionConfig;
use super::timers::TimerQueue;
use crate::pointer::{
    ArmSample, ArmSelector, Hand, MotionFilter, MotionOutcome, PoseFrame, ReleasePolicy,
    ScreenPoint, Sensitivity, Viewport,
};
use crate::zones::{
    ActionDispatcher, ActionSink, CooldownScope, DwellDetector, DwellEvent, DwellTimer, ZoneId,
};

/// A dwell confirmation and what came of it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub zone: ZoneId,
    /// False when the cooldown suppressed the action
    pub fired: bool,
    /// This activation finished the session
    pub completed: bool,
}

/// Outcome of one processed frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub motion: MotionOutcome,
    pub activation: Option<Activation>,
}

/// Read-only view for the presentation layer
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub pointer: ScreenPoint,
    /// Zone the pointer rests in (pending or confirmed)
    pub highlighted: Option<ZoneId>,
    pub confirmed: Option<ZoneId>,
    pub visited: Vec<ZoneId>,
    pub completed: bool,
    pub gesture_active: bool,
    pub sensitivity: f32,
}

pub struct Session {
    config: SessionConfig,
    viewport: Viewport,
    pointer: ScreenPoint,
    motion: MotionFilter,
    dwell: DwellDetector,
    dispatcher: ActionDispatcher,
    timers: TimerQueue<DwellTimer>,
    visited: [bool; 3],
    completed: bool,
    gesture_active: bool,
}

impl Session {
    pub fn new(config: SessionConfig, viewport: Viewport) -> Self {
        let motion = MotionFilter::new(config.release);
        let dwell = DwellDetector::new(config.dwell_ms);
        let dispatcher = ActionDispatcher::new(config.cooldown_ms, config.cooldown_scope);
        Self {
            pointer: viewport.center(),
            viewport,
            motion,
            dwell,
            dispatcher,
            timers: TimerQueue::new(),
            visited: [false; 3],
            completed: false,
            gesture_active: false,
            config,
        }
    }

    /// Process a full pose frame using the configured hand
    pub fn process_pose(&mut self, pose: &PoseFrame, now_ms: f64, sink: &mut dyn ActionSink) -> FrameReport {
        let arm = self.config.hand.select(pose);
        self.process_frame(arm, now_ms, sink)
    }

    /// Process one wrist/shoulder sample
    pub fn process_frame(&mut self, arm: ArmSample, now_ms: f64, sink: &mut dyn ActionSink) -> FrameReport {
        // Timers due before this frame saw the pointer where it was last frame
        let activation = self.tick(now_ms, sink);

        let motion = self.motion.update(
            arm.gesture(),
            self.pointer,
            self.viewport,
            self.config.sensitivity,
        );

        match motion {
            MotionOutcome::Moved(pointer) => {
                self.pointer = pointer;
                self.gesture_active = true;
                if !self.completed {
                    self.check_zones(now_ms);
                }
            }
            MotionOutcome::Inactive => {
                if self.gesture_active {
                    log::debug!("gesture released");
                }
                self.gesture_active = false;
                self.dwell.release();
                self.timers.clear();
            }
        }

        FrameReport { motion, activation }
    }

    fn check_zones(&mut self, now_ms: f64) {
        let zones = self.config.layout.zones(self.viewport);
        match self.dwell.check(self.pointer, &zones, now_ms) {
            DwellEvent::Started(timer) => {
                let epoch = timer.epoch;
                self.timers.retain(|t| t.epoch == epoch);
                self.timers.schedule(timer.due_ms, timer);
            }
            DwellEvent::Cancelled(_) => self.timers.clear(),
            DwellEvent::Exited(_) | DwellEvent::Unchanged => {}
        }
    }

    /// Fire due dwell timers
    ///
    /// Called at the start of every frame and by the host between frames,
    /// so a dwell confirms on its deadline even if no frame arrives.
    pub fn tick(&mut self, now_ms: f64, sink: &mut dyn ActionSink) -> Option<Activation> {
        let mut activation = None;
        while let Some(timer) = self.timers.pop_due(now_ms) {
            if let Some(zone) = self.dwell.confirm(timer, now_ms) {
                activation = Some(self.activate(zone, now_ms, sink));
            }
        }
        activation
    }

    fn activate(&mut self, zone: ZoneId, now_ms: f64, sink: &mut dyn ActionSink) -> Activation {
        log::info!("{} confirmed", zone.name());
        self.visited[zone.index()] = true;

        let action = self.config.layout.action(zone);
        let completes = action.completes();
        if completes {
            self.completed = true;
            self.timers.clear();
            log::info!("session completed at {}", zone.name());
        }

        let fired = self.dispatcher.fire(zone, action, now_ms, sink);
        Activation {
            zone,
            fired,
            completed: completes,
        }
    }

    /// Viewport changed: clamp the pointer, keep any dwell in progress
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pointer = viewport.clamp(self.pointer);
    }

    /// Explicit restart: recenter and clear dwell, cooldown and completion
    pub fn reset(&mut self) {
        self.pointer = self.viewport.center();
        self.motion.reset();
        self.dwell.reset();
        self.dispatcher.reset();
        self.timers.clear();
        self.visited = [false; 3];
        self.completed = false;
        self.gesture_active = false;
        log::info!("session reset");
    }

    pub fn set_sensitivity(&mut self, value: f32) {
        self.config.sensitivity = Sensitivity::new(value);
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.config.hand = hand;
    }

    pub fn set_release_policy(&mut self, release: ReleasePolicy) {
        self.config.release = release;
        self.motion.set_release_policy(release);
    }

    pub fn set_cooldown_scope(&mut self, scope: CooldownScope) {
        self.config.cooldown_scope = scope;
        self.dispatcher.set_scope(scope);
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    pub fn pointer(&self) -> ScreenPoint {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pointer: self.pointer,
            highlighted: self.dwell.current_zone(),
            confirmed: self.dwell.active_zone(),
            visited: ZoneId::ALL
                .into_iter()
                .filter(|id| self.visited[id.index()])
                .collect(),
            completed: self.completed,
            gesture_active: self.gesture_active,
            sensitivity: self.config.sensitivity.get(),
        }
    }

    /// One-line status for a debug overlay
    pub fn status_text(&self) -> String {
        let snap = self.snapshot();
        format!(
            "Pointer: {:.0},{:.0} | Hand: {}{} | Zone: {} | Sens: {:.1} | Visited: {}/3{}",
            snap.pointer.x,
            snap.pointer.y,
            self.config.hand.name(),
            if snap.gesture_active { " ✓" } else { " ✗" },
            snap.highlighted.map(|z| z.name()).unwrap_or("-"),
            snap.sensitivity,
            snap.visited.len(),
            if snap.completed { " | DONE" } else { "" },
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default(), Viewport::default())
    }
}
