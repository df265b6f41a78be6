//! Session integration - the single gesture session behind the JS API
//!
//! JavaScript feeds pose frames and timer ticks; presentation reads the
//! pointer, zone and completion state back out.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use super::error::BridgeError;
use super::landmarks::{parse_point, parse_pose};
use super::sink::BrowserSink;
use crate::pointer::{ArmSample, Hand, PoseFrame, ReleasePolicy, Viewport};
use crate::session::{FrameReport, Session, SessionConfig};
use crate::zones::CooldownScope;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Monotonic page clock; falls back to wall time without `performance`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn viewport_from_window() -> Result<Viewport, BridgeError> {
    let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
    let read = |v: Result<JsValue, JsValue>| -> Result<f32, BridgeError> {
        v.map_err(|e| BridgeError::ViewportUnavailable(format!("{:?}", e)))?
            .as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| BridgeError::ViewportUnavailable("non-numeric size".to_string()))
    };
    Ok(Viewport::new(read(window.inner_width())?, read(window.inner_height())?))
}

fn report(frame: FrameReport) {
    if let Some(activation) = frame.activation {
        log::debug!(
            "activation {} fired={} completed={}",
            activation.zone.name(),
            activation.fired,
            activation.completed
        );
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a fresh session for the given viewport
#[wasm_bindgen]
pub fn init_session(width: f32, height: f32) {
    let viewport = Viewport::new(width, height);
    SESSION.with(|cell| {
        *cell.borrow_mut() = Session::new(SessionConfig::default(), viewport);
    });
    log::info!("session started at {:.0}x{:.0}", viewport.width, viewport.height);
}

/// Start a fresh session sized to the browser window
#[wasm_bindgen]
pub fn init_session_from_window() -> Result<(), JsValue> {
    let viewport = viewport_from_window()?;
    init_session(viewport.width, viewport.height);
    Ok(())
}

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × x, y, z), or an empty array when no pose was found
///
/// The viewport is the one last given to `init_session*` or `resize*`;
/// hook `resize_from_window` to the window's `resize` event.
#[wasm_bindgen]
pub fn update_pose(data: &[f32]) {
    let pose = parse_pose(data).unwrap_or_else(|e| {
        log::warn!("{}", e);
        PoseFrame::empty()
    });
    let now = now_ms();
    SESSION.with(|cell| {
        let frame = cell.borrow_mut().process_pose(&pose, now, &mut BrowserSink);
        report(frame);
    });
}

/// Feed just the tracked wrist and shoulder; NaN marks a missing point
#[wasm_bindgen]
pub fn update_arm(wrist_x: f32, wrist_y: f32, shoulder_x: f32, shoulder_y: f32) {
    let arm = ArmSample::new(parse_point(wrist_x, wrist_y), parse_point(shoulder_x, shoulder_y));
    let now = now_ms();
    SESSION.with(|cell| {
        let frame = cell.borrow_mut().process_frame(arm, now, &mut BrowserSink);
        report(frame);
    });
}

/// Service due dwell timers (call from requestAnimationFrame or a timeout
/// armed at `next_deadline_ms`)
#[wasm_bindgen]
pub fn tick() {
    let now = now_ms();
    SESSION.with(|cell| {
        cell.borrow_mut().tick(now, &mut BrowserSink);
    });
}

#[wasm_bindgen]
pub fn resize(width: f32, height: f32) {
    SESSION.with(|cell| cell.borrow_mut().resize(Viewport::new(width, height)));
}

/// Re-read the window size (call from a resize listener)
#[wasm_bindgen]
pub fn resize_from_window() -> Result<(), JsValue> {
    let viewport = viewport_from_window()?;
    SESSION.with(|cell| cell.borrow_mut().resize(viewport));
    Ok(())
}

/// Set pointer gain; clamped to [1, 10]
#[wasm_bindgen]
pub fn set_sensitivity(value: f32) {
    SESSION.with(|cell| cell.borrow_mut().set_sensitivity(value));
}

#[wasm_bindgen]
pub fn get_sensitivity() -> f32 {
    SESSION.with(|cell| cell.borrow().config().sensitivity.get())
}

#[wasm_bindgen]
pub fn set_tracked_hand(left: bool) {
    let hand = if left { Hand::Left } else { Hand::Right };
    SESSION.with(|cell| cell.borrow_mut().set_hand(hand));
}

/// Keep (true) or zero (false) pointer velocity while the hand is down
#[wasm_bindgen]
pub fn set_retain_velocity(retain: bool) {
    let release = if retain { ReleasePolicy::Retain } else { ReleasePolicy::Reset };
    SESSION.with(|cell| cell.borrow_mut().set_release_policy(release));
}

/// Track the link cooldown per zone (true) or across all zones (false)
#[wasm_bindgen]
pub fn set_per_zone_cooldown(per_zone: bool) {
    let scope = if per_zone { CooldownScope::PerAction } else { CooldownScope::Global };
    SESSION.with(|cell| cell.borrow_mut().set_cooldown_scope(scope));
}

/// "Start over": recenter the pointer and clear dwell, cooldown, completion
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|cell| cell.borrow_mut().reset());
}

// ============================================================================
// PRESENTATION READ-OUT
// ============================================================================

/// Pointer as [x, y] in pixels
#[wasm_bindgen]
pub fn get_pointer() -> Vec<f32> {
    SESSION.with(|cell| {
        let p = cell.borrow().pointer();
        vec![p.x, p.y]
    })
}

/// Zone the pointer rests in (pending or confirmed), by name
#[wasm_bindgen]
pub fn get_highlighted_zone() -> Option<String> {
    SESSION.with(|cell| cell.borrow().snapshot().highlighted.map(|z| z.name().to_string()))
}

/// Zone whose dwell has been confirmed, by name
#[wasm_bindgen]
pub fn get_confirmed_zone() -> Option<String> {
    SESSION.with(|cell| cell.borrow().snapshot().confirmed.map(|z| z.name().to_string()))
}

#[wasm_bindgen]
pub fn is_completed() -> bool {
    SESSION.with(|cell| cell.borrow().is_completed())
}

/// Earliest pending timer deadline, on the `performance.now()` clock
#[wasm_bindgen]
pub fn next_deadline_ms() -> Option<f64> {
    SESSION.with(|cell| cell.borrow().next_deadline())
}

/// Formatted status line for a debug overlay
#[wasm_bindgen]
pub fn get_status_text() -> String {
    SESSION.with(|cell| cell.borrow().status_text())
}
