//! The live binding between the controller and one loaded audio resource.
//!
//! A `Session` fetches the track's audio stream, probes its duration and
//! wraps a single `rodio` sink plus the elapsed-time accounting. At most
//! one session is alive per player thread; replacing one stops its sink
//! first.

use std::io::Cursor;
use std::thread;
use std::time::{Duration, Instant};

use lofty::prelude::*;
use lofty::probe::Probe;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

use crate::catalog::Track;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to fetch audio stream: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to decode audio stream: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Elapsed-time accounting for one resource, independent of the sink.
/// Accumulates wall-clock time across pause/resume cycles and seeks.
pub(super) struct PlayClock {
    started_at: Option<Instant>,
    accumulated: Duration,
    paused: bool,
}

impl PlayClock {
    /// A clock that starts running at zero.
    pub fn running() -> Self {
        Self {
            started_at: Some(Instant::now()),
            accumulated: Duration::ZERO,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    /// Pause or resume; returns `true` when running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.paused {
            self.started_at = Some(Instant::now());
        } else if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
        self.paused = !self.paused;
        !self.paused
    }

    /// Jump the accounting to `target`, keeping the paused state.
    pub fn rewind_to(&mut self, target: Duration) {
        self.accumulated = target;
        self.started_at = (!self.paused).then(Instant::now);
    }
}

pub(super) struct Session {
    sink: Sink,
    /// The fetched stream, kept so seeks can rebuild the sink.
    bytes: Vec<u8>,
    duration_millis: u64,
    clock: PlayClock,
}

impl Session {
    /// Fetch, decode and start playing `track`. Single attempt; any
    /// failure leaves the controller idle.
    pub fn load(
        http: &reqwest::blocking::Client,
        stream: &OutputStream,
        track: &Track,
    ) -> Result<Self, SessionError> {
        let bytes = http
            .get(&track.audio)
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec();

        // Duration comes from the container metadata; 1 means unknown
        // and disables seeking until a later load succeeds.
        let duration_millis = probe_duration_millis(&bytes).unwrap_or(1);

        let sink = build_sink(stream, &bytes, Duration::ZERO)?;
        sink.set_volume(1.0);
        sink.play();

        Ok(Self {
            sink,
            bytes,
            duration_millis,
            clock: PlayClock::running(),
        })
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// The sink drained its source: the track played to its end.
    pub fn finished(&self) -> bool {
        self.sink.empty()
    }

    /// Pause or resume; returns `true` when playing afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        let playing = self.clock.toggle();
        if playing {
            self.sink.play();
        } else {
            self.sink.pause();
        }
        playing
    }

    /// Rebuild the sink at `target_millis`, keeping the paused state.
    /// Decoding from the buffered bytes again is our seeking primitive.
    pub fn seek_to(
        &mut self,
        stream: &OutputStream,
        target_millis: u64,
    ) -> Result<(), SessionError> {
        let target = Duration::from_millis(target_millis);

        self.sink.stop();
        let sink = build_sink(stream, &self.bytes, target)?;
        if !self.clock.is_paused() {
            sink.play();
        }

        self.sink = sink;
        self.clock.rewind_to(target);
        Ok(())
    }

    /// Linear volume ramp 1.0 -> 0.0 in discrete steps with a fixed
    /// inter-step delay. Blocks the player thread; audio keeps flowing
    /// in rodio's mixer thread meanwhile.
    pub fn fade_out(&self, fade_ms: u64, steps: u64) {
        if fade_ms == 0 {
            self.sink.set_volume(0.0);
            return;
        }
        let steps = steps.max(1);
        let step_ms = (fade_ms / steps).max(1);
        self.sink.set_volume(1.0);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.sink.set_volume(1.0 - t);
            thread::sleep(Duration::from_millis(step_ms));
        }
        self.sink.set_volume(0.0);
    }

    /// Linear volume ramp 0.0 -> 1.0, the incoming half of a transition.
    pub fn fade_in(&self, fade_ms: u64, steps: u64) {
        if fade_ms == 0 {
            self.sink.set_volume(1.0);
            return;
        }
        let steps = steps.max(1);
        let step_ms = (fade_ms / steps).max(1);
        self.sink.set_volume(0.0);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.sink.set_volume(t);
            thread::sleep(Duration::from_millis(step_ms));
        }
        self.sink.set_volume(1.0);
    }

    /// Stop the sink and drop the resource. Always called before a new
    /// session is created.
    pub fn release(self) {
        self.sink.stop();
    }
}

fn build_sink(
    stream: &OutputStream,
    bytes: &[u8],
    start_at: Duration,
) -> Result<Sink, SessionError> {
    let source = Decoder::new(Cursor::new(bytes.to_vec()))?
        // `skip_duration` is the seeking primitive; Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

fn probe_duration_millis(bytes: &[u8]) -> Option<u64> {
    let tagged = Probe::new(Cursor::new(bytes)).guess_file_type().ok()?.read().ok()?;
    let millis = tagged.properties().duration().as_millis() as u64;
    (millis > 0).then_some(millis)
}
