//! Zones module - trigger zones, dwell confirmation, action dispatch
//!
//! Re-exports only. All logic in submodules.

mod layout;
mod dwell;
mod dispatch;

pub use layout::{
    Action, ConfigError, Zone, ZoneId, ZoneLayout,
    BOTTOM_LEFT_URL, BOTTOM_RIGHT_URL, DEFAULT_INSET, DEFAULT_RADIUS, TOP_RIGHT_URL,
};
pub use dwell::{DwellDetector, DwellEvent, DwellPhase, DwellTimer, DWELL_THRESHOLD_MS};
pub use dispatch::{ActionDispatcher, ActionSink, CooldownScope, COOLDOWN_MS};

#[cfg(test)]
pub(crate) use dispatch::RecordingSink;
