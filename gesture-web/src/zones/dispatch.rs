//! Action dispatch with cooldown
//!
//! Confirmed zones hand their action to an `ActionSink`. A cooldown window
//! suppresses repeat firing; by default it is shared by all zones.

use super::layout::{Action, ZoneId};

/// Minimum time between two fired actions
pub const COOLDOWN_MS: f64 = 3000.0;

/// Where opened links go. Fire-and-forget: failures stay inside the sink.
pub trait ActionSink {
    fn open(&mut self, url: &str);
}

/// Whether the cooldown is shared or tracked per zone action
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CooldownScope {
    #[default]
    Global,
    PerAction,
}

/// Last-fired timestamps
#[derive(Clone, Debug, Default, PartialEq)]
struct CooldownState {
    last_any: Option<f64>,
    last_per_zone: [Option<f64>; 3],
}

impl CooldownState {
    fn last_fired(&self, scope: CooldownScope, zone: ZoneId) -> Option<f64> {
        match scope {
            CooldownScope::Global => self.last_any,
            CooldownScope::PerAction => self.last_per_zone[zone.index()],
        }
    }

    fn record(&mut self, zone: ZoneId, now_ms: f64) {
        self.last_any = Some(now_ms);
        self.last_per_zone[zone.index()] = Some(now_ms);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct ActionDispatcher {
    cooldown: CooldownState,
    window_ms: f64,
    scope: CooldownScope,
}

impl ActionDispatcher {
    pub fn new(window_ms: f64, scope: CooldownScope) -> Self {
        Self {
            cooldown: CooldownState::default(),
            window_ms: window_ms.max(0.0),
            scope,
        }
    }

    /// Milliseconds left before `zone` may fire again (0 when ready)
    pub fn remaining_ms(&self, zone: ZoneId, now_ms: f64) -> f64 {
        match self.cooldown.last_fired(self.scope, zone) {
            Some(last) => (self.window_ms - (now_ms - last)).max(0.0),
            None => 0.0,
        }
    }

    /// Run the zone's action unless cooling down. Returns whether it fired.
    pub fn fire(&mut self, zone: ZoneId, action: &Action, now_ms: f64, sink: &mut dyn ActionSink) -> bool {
        let remaining = self.remaining_ms(zone, now_ms);
        if remaining > 0.0 {
            log::debug!(
                "{} suppressed, cooldown {:.0}ms left",
                zone.name(),
                remaining
            );
            return false;
        }

        self.cooldown.record(zone, now_ms);
        log::info!("{} fired: opening {}", zone.name(), action.url());
        sink.open(action.url());
        true
    }

    /// Switch scope; recorded fire times carry over
    pub fn set_scope(&mut self, scope: CooldownScope) {
        self.scope = scope;
    }

    pub fn reset(&mut self) {
        self.cooldown.clear();
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(COOLDOWN_MS, CooldownScope::default())
    }
}

/// Sink that records every opened URL
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub opened: Vec<String>,
}

#[cfg(test)]
impl ActionSink for RecordingSink {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> Action {
        Action::OpenLink(url.to_string())
    }

    #[test]
    fn test_second_fire_within_window_is_suppressed() {
        let mut dispatcher = ActionDispatcher::default();
        let mut sink = RecordingSink::default();
        let action = link("https://github.com");

        assert!(dispatcher.fire(ZoneId::TopRight, &action, 1000.0, &mut sink));
        assert!(!dispatcher.fire(ZoneId::TopRight, &action, 3999.0, &mut sink));
        assert!(dispatcher.fire(ZoneId::TopRight, &action, 4000.0, &mut sink));
        assert_eq!(sink.opened.len(), 2);
    }

    #[test]
    fn test_global_cooldown_spans_zones() {
        let mut dispatcher = ActionDispatcher::new(COOLDOWN_MS, CooldownScope::Global);
        let mut sink = RecordingSink::default();

        assert!(dispatcher.fire(ZoneId::TopRight, &link("a"), 0.0, &mut sink));
        assert!(!dispatcher.fire(ZoneId::BottomLeft, &link("b"), 1500.0, &mut sink));
        assert_eq!(dispatcher.remaining_ms(ZoneId::BottomLeft, 1500.0), 1500.0);
        assert_eq!(sink.opened, vec!["a".to_string()]);
    }

    #[test]
    fn test_per_action_cooldown_is_independent() {
        let mut dispatcher = ActionDispatcher::new(COOLDOWN_MS, CooldownScope::PerAction);
        let mut sink = RecordingSink::default();

        assert!(dispatcher.fire(ZoneId::TopRight, &link("a"), 0.0, &mut sink));
        assert!(dispatcher.fire(ZoneId::BottomLeft, &link("b"), 1500.0, &mut sink));
        assert!(!dispatcher.fire(ZoneId::TopRight, &link("a"), 2000.0, &mut sink));
        assert_eq!(sink.opened, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut dispatcher = ActionDispatcher::default();
        let mut sink = RecordingSink::default();

        dispatcher.fire(ZoneId::TopRight, &link("a"), 0.0, &mut sink);
        dispatcher.reset();
        assert_eq!(dispatcher.remaining_ms(ZoneId::TopRight, 10.0), 0.0);
        assert!(dispatcher.fire(ZoneId::TopRight, &link("a"), 10.0, &mut sink));
    }
}
