//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod error;
mod landmarks;
mod session_integration;
mod sink;

pub use console::init_logging;
pub use error::BridgeError;
pub use landmarks::{parse_pose, POSE_FLOATS};
pub use sink::BrowserSink;

pub use session_integration::{
    // Session control
    init_session,
    init_session_from_window,
    update_pose,
    update_arm,
    tick,
    resize,
    resize_from_window,
    set_sensitivity,
    get_sensitivity,
    set_tracked_hand,
    set_retain_velocity,
    set_per_zone_cooldown,
    reset_session,
    // Presentation read-out
    get_pointer,
    get_highlighted_zone,
    get_confirmed_zone,
    is_completed,
    next_deadline_ms,
    get_status_text,
};
