//! Gesture Web - raised-hand pointer with dwell-confirmed zones
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod pointer;
pub mod zones;
pub mod session;
mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::*;

pub use session::{Session, SessionConfig, Snapshot};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logging(log::LevelFilter::Info);
}

/// Change console log verbosity: 0=off, 1=error, 2=warn, 3=info, 4=debug
#[wasm_bindgen]
pub fn set_log_level(level: u8) {
    let filter = match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    bridge::init_logging(filter);
}
