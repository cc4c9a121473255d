//! Player-facing small types and handles.

use std::sync::{Arc, Mutex};

use crate::catalog::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipDirection {
    Next,
    Prev,
}

#[derive(Debug)]
pub enum PlayerCmd {
    /// Replace the queue and start playing the track at `index`.
    Play { queue: Vec<Track>, index: usize },
    /// Toggle pause/resume. No-op when nothing is loaded.
    TogglePause,
    /// Seek to a fraction of the track duration, clamped to `[0, 1]`.
    Seek(f32),
    /// Fade out the current track and move to its queue neighbor,
    /// wrapping around at both ends.
    Skip(SkipDirection),
    /// Stop playback and release the session.
    Stop,
    /// Quit the player thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback information shared with the UI and MPRIS.
///
/// Written by both the command loop and the 500 ms ticker; both report
/// the same underlying counters, so last-write-wins is fine.
#[derive(Debug, Clone)]
pub struct NowPlayingInfo {
    /// The active track, if any. Kept even when loading failed so the
    /// player screen can show what stalled.
    pub track: Option<Track>,
    /// Queue position of the active track.
    pub index: Option<usize>,
    /// Length of the active queue.
    pub queue_len: usize,
    /// Elapsed playback position (milliseconds).
    pub position_millis: u64,
    /// Track duration in milliseconds; 1 until metadata is known, which
    /// keeps progress ratios well-defined before the stream loads.
    pub duration_millis: u64,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Last load/seek failure, for the status line.
    pub last_error: Option<String>,
}

impl Default for NowPlayingInfo {
    fn default() -> Self {
        Self {
            track: None,
            index: None,
            queue_len: 0,
            position_millis: 0,
            duration_millis: 1,
            playing: false,
            last_error: None,
        }
    }
}

pub type NowPlayingHandle = Arc<Mutex<NowPlayingInfo>>;

/// Circular queue neighbor: `(i + 1) mod len` forward, `(i - 1 + len) mod
/// len` backward. A single-element queue wraps onto itself.
pub(crate) fn wrap_index(len: usize, current: usize, direction: SkipDirection) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    Some(match direction {
        SkipDirection::Next => (current + 1) % len,
        SkipDirection::Prev => (current + len - 1) % len,
    })
}

/// Target position for a fractional seek. The fraction is clamped to
/// `[0, 1]`; a duration of 1 means "unknown" and callers skip the seek.
pub(crate) fn seek_target_millis(fraction: f32, duration_millis: u64) -> u64 {
    let fraction = fraction.clamp(0.0, 1.0) as f64;
    (fraction * duration_millis as f64).round() as u64
}
