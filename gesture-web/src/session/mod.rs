//! Session module - configuration, timers and the frame pipeline
//!
//! Re-exports only. All logic in submodules.

mod config;
mod timers;
mod pipeline;

pub use config::SessionConfig;
pub use timers::TimerQueue;
pub use pipeline::{Activation, FrameReport, Session, Snapshot};
