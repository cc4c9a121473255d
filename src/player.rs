//! Transport controller.
//!
//! Owns the lifecycle of one active audio session at a time: load, play,
//! pause, seek, skip-with-fade, auto-advance and the polled
//! position/duration readout shared with the UI.

mod controller;
mod session;
mod thread;
mod types;

pub use controller::Player;
pub use types::{NowPlayingHandle, NowPlayingInfo, PlayerCmd, SkipDirection};

#[cfg(test)]
mod tests;
