use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder};

use crate::catalog::Track;
use crate::config::AudioSettings;

use super::session::Session;
use super::types::{
    wrap_index, seek_target_millis, NowPlayingHandle, PlayerCmd, SkipDirection,
};

pub(super) fn spawn_player_thread(
    rx: Receiver<PlayerCmd>,
    now_playing: NowPlayingHandle,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                // No output device: publish the failure and bail; the UI
                // keeps working as a browse-only client.
                if let Ok(mut info) = now_playing.lock() {
                    info.last_error = Some(format!("no audio output device: {e}"));
                }
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let http = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.fetch_timeout_secs))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                if let Ok(mut info) = now_playing.lock() {
                    info.last_error = Some(format!("audio fetcher init failed: {e}"));
                }
                return;
            }
        };

        // Spawn a ticker thread to advance the polled position readout.
        // Both this ticker and the command loop below write the shared
        // info; they report the same counters, so last-write-wins.
        let alive = Arc::new(AtomicBool::new(true));
        let ticker = spawn_ticker(now_playing.clone(), alive.clone());

        let mut deck = Deck {
            stream,
            http,
            settings,
            now_playing,
            queue: Vec::new(),
            index: None,
            session: None,
        };

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    PlayerCmd::Play { queue, index } => {
                        deck.queue = queue;
                        deck.load_and_play(index);
                    }
                    PlayerCmd::TogglePause => deck.toggle_pause(),
                    PlayerCmd::Seek(fraction) => deck.seek(fraction),
                    PlayerCmd::Skip(direction) => deck.skip(direction, true),
                    PlayerCmd::Stop => deck.stop(),
                    PlayerCmd::Quit { fade_out_ms } => {
                        if let Some(session) = deck.session.take() {
                            session.fade_out(fade_out_ms, deck.settings.fade_steps);
                            session.release();
                        }
                        if let Ok(mut info) = deck.now_playing.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Auto-advance: the resource reports finished. Same
                    // release/reload path as a manual next, minus the
                    // audible fade-out (nothing is left to fade).
                    let finished = deck
                        .session
                        .as_ref()
                        .is_some_and(|s| !s.is_paused() && s.finished());
                    if finished {
                        deck.skip(SkipDirection::Next, false);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        alive.store(false, Ordering::Relaxed);
        let _ = ticker.join();
    })
}

/// Advance the readout at a fixed cadence until `alive` clears. The
/// command loop clears the flag before it exits, on quit as well as on a
/// dropped channel.
pub(super) fn spawn_ticker(now_playing: NowPlayingHandle, alive: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        while alive.load(Ordering::Relaxed) {
            thread::sleep(Duration::from_millis(500));
            advance_readout(&now_playing);
        }
    })
}

/// One ticker step: while playing, move the position forward by the tick
/// size, clamped to the duration once a real one is known.
pub(super) fn advance_readout(now_playing: &NowPlayingHandle) {
    let Ok(mut info) = now_playing.lock() else {
        return;
    };
    if info.playing {
        let next = info.position_millis.saturating_add(500);
        info.position_millis = if info.duration_millis > 1 {
            next.min(info.duration_millis)
        } else {
            next
        };
    }
}

/// Per-thread playback state: the queue, the active index and at most one
/// live session.
struct Deck {
    stream: OutputStream,
    http: reqwest::blocking::Client,
    settings: AudioSettings,
    now_playing: NowPlayingHandle,
    queue: Vec<Track>,
    index: Option<usize>,
    session: Option<Session>,
}

impl Deck {
    /// Release the current session (the previous resource is always gone
    /// before a new one exists), then fetch and start the track at `i`.
    fn load_and_play(&mut self, i: usize) {
        if let Some(old) = self.session.take() {
            old.release();
        }

        let Some(track) = self.queue.get(i).cloned() else {
            self.publish_stopped();
            return;
        };
        self.index = Some(i);

        // Reset the readout before the (blocking) fetch so a slow load
        // shows 0:00 over a unit duration instead of stale numbers.
        if let Ok(mut info) = self.now_playing.lock() {
            info.track = Some(track.clone());
            info.index = Some(i);
            info.queue_len = self.queue.len();
            info.position_millis = 0;
            info.duration_millis = 1;
            info.playing = false;
        }

        match Session::load(&self.http, &self.stream, &track) {
            Ok(session) => {
                if let Ok(mut info) = self.now_playing.lock() {
                    info.duration_millis = session.duration_millis();
                    info.playing = true;
                    info.last_error = None;
                }
                self.session = Some(session);
            }
            Err(e) => {
                // Stay idle; no retry. The track stays visible so the
                // player screen can show what stalled.
                if let Ok(mut info) = self.now_playing.lock() {
                    info.playing = false;
                    info.last_error = Some(format!("could not play \"{}\": {e}", track.title));
                }
            }
        }
    }

    fn toggle_pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let playing = session.toggle_pause();
        if let Ok(mut info) = self.now_playing.lock() {
            info.playing = playing;
            info.position_millis = session.elapsed().as_millis() as u64;
        }
    }

    fn seek(&mut self, fraction: f32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let duration = session.duration_millis();
        if duration <= 1 {
            return;
        }

        let target = seek_target_millis(fraction, duration);
        match session.seek_to(&self.stream, target) {
            Ok(()) => {
                if let Ok(mut info) = self.now_playing.lock() {
                    info.position_millis = target;
                }
            }
            Err(e) => {
                if let Ok(mut info) = self.now_playing.lock() {
                    info.last_error = Some(format!("seek failed: {e}"));
                }
            }
        }
    }

    /// Fade out (manual skips only), swap to the circular queue neighbor
    /// and fade the incoming track in.
    fn skip(&mut self, direction: SkipDirection, manual: bool) {
        let Some(current) = self.index else {
            return;
        };
        let Some(next) = wrap_index(self.queue.len(), current, direction) else {
            return;
        };

        if manual {
            if let Some(session) = self.session.as_ref() {
                session.fade_out(self.settings.fade_ms, self.settings.fade_steps);
            }
        }

        self.load_and_play(next);

        if let Some(session) = self.session.as_ref() {
            session.fade_in(self.settings.fade_ms, self.settings.fade_steps);
        }
    }

    fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.release();
        }
        self.index = None;
        self.publish_stopped();
    }

    fn publish_stopped(&self) {
        if let Ok(mut info) = self.now_playing.lock() {
            info.track = None;
            info.index = None;
            info.position_millis = 0;
            info.duration_millis = 1;
            info.playing = false;
        }
    }
}
