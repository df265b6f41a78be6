//! Session configuration
//!
//! Every tunable in one place. Out-of-range values are clamped here so the
//! pipeline never sees them.

use crate::pointer::{Hand, ReleasePolicy, Sensitivity};
use crate::zones::{CooldownScope, ZoneLayout, COOLDOWN_MS, DWELL_THRESHOLD_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Pointer gain, [1.0, 10.0]
    pub sensitivity: Sensitivity,
    /// Arm that drives the pointer
    pub hand: Hand,
    /// Velocity handling when the hand drops
    pub release: ReleasePolicy,
    pub dwell_ms: f64,
    pub cooldown_ms: f64,
    pub cooldown_scope: CooldownScope,
    pub layout: ZoneLayout,
}

impl SessionConfig {
    pub fn with_sensitivity(mut self, value: f32) -> Self {
        self.sensitivity = Sensitivity::new(value);
        self
    }

    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    pub fn with_release(mut self, release: ReleasePolicy) -> Self {
        self.release = release;
        self
    }

    pub fn with_dwell_ms(mut self, ms: f64) -> Self {
        self.dwell_ms = non_negative_ms(ms, DWELL_THRESHOLD_MS);
        self
    }

    pub fn with_cooldown(mut self, ms: f64, scope: CooldownScope) -> Self {
        self.cooldown_ms = non_negative_ms(ms, COOLDOWN_MS);
        self.cooldown_scope = scope;
        self
    }

    pub fn with_layout(mut self, layout: ZoneLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// NaN/inf fall back to `default`, negatives become zero
fn non_negative_ms(ms: f64, default: f64) -> f64 {
    if ms.is_finite() {
        ms.max(0.0)
    } else {
        default
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sensitivity: Sensitivity::default(),
            hand: Hand::default(),
            release: ReleasePolicy::default(),
            dwell_ms: DWELL_THRESHOLD_MS,
            cooldown_ms: COOLDOWN_MS,
            cooldown_scope: CooldownScope::default(),
            layout: ZoneLayout::default(),
        }
    }
}
