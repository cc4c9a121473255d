use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::session::PlayClock;
use super::thread::{advance_readout, spawn_ticker};
use super::types::{seek_target_millis, wrap_index, NowPlayingInfo, SkipDirection};

#[test]
fn skip_forward_walks_the_queue() {
    assert_eq!(wrap_index(3, 0, SkipDirection::Next), Some(1));
    assert_eq!(wrap_index(3, 1, SkipDirection::Next), Some(2));
}

#[test]
fn skip_wraps_around_both_ends() {
    // [A, B, C]: next from C lands on A, prev from A lands on C.
    assert_eq!(wrap_index(3, 2, SkipDirection::Next), Some(0));
    assert_eq!(wrap_index(3, 0, SkipDirection::Prev), Some(2));
}

#[test]
fn skip_on_single_track_queue_stays_put() {
    assert_eq!(wrap_index(1, 0, SkipDirection::Next), Some(0));
    assert_eq!(wrap_index(1, 0, SkipDirection::Prev), Some(0));
}

#[test]
fn skip_on_empty_queue_is_none() {
    assert_eq!(wrap_index(0, 0, SkipDirection::Next), None);
    assert_eq!(wrap_index(0, 5, SkipDirection::Prev), None);
}

#[test]
fn skip_normalizes_out_of_range_index() {
    // A stale index past the end is folded back into the queue first.
    assert_eq!(wrap_index(3, 7, SkipDirection::Next), Some(2));
    assert_eq!(wrap_index(3, 7, SkipDirection::Prev), Some(0));
}

#[test]
fn seek_target_maps_fraction_onto_duration() {
    assert_eq!(seek_target_millis(0.0, 180_000), 0);
    assert_eq!(seek_target_millis(0.5, 180_000), 90_000);
    assert_eq!(seek_target_millis(1.0, 180_000), 180_000);
}

#[test]
fn seek_target_clamps_wild_fractions() {
    assert_eq!(seek_target_millis(-0.3, 180_000), 0);
    assert_eq!(seek_target_millis(4.2, 180_000), 180_000);
}

#[test]
fn clock_toggle_twice_restores_playing() {
    let mut clock = PlayClock::running();
    assert!(!clock.is_paused());
    assert!(!clock.toggle());
    assert!(clock.is_paused());
    assert!(clock.toggle());
    assert!(!clock.is_paused());
}

#[test]
fn clock_freezes_while_paused() {
    let mut clock = PlayClock::running();
    clock.toggle();
    let frozen = clock.elapsed();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(clock.elapsed(), frozen);
}

#[test]
fn clock_rewind_keeps_paused_state() {
    let mut clock = PlayClock::running();
    clock.toggle();
    clock.rewind_to(Duration::from_secs(30));
    assert!(clock.is_paused());
    assert_eq!(clock.elapsed(), Duration::from_secs(30));
}

#[test]
fn ticker_step_advances_and_clamps() {
    let handle = Arc::new(Mutex::new(NowPlayingInfo::default()));
    {
        let mut info = handle.lock().unwrap();
        info.playing = true;
        info.position_millis = 179_800;
        info.duration_millis = 180_000;
    }
    advance_readout(&handle);
    assert_eq!(handle.lock().unwrap().position_millis, 180_000);

    // Paused readouts never move.
    handle.lock().unwrap().playing = false;
    advance_readout(&handle);
    assert_eq!(handle.lock().unwrap().position_millis, 180_000);
}

#[test]
fn ticker_exits_once_flag_clears() {
    let handle = Arc::new(Mutex::new(NowPlayingInfo::default()));
    let alive = Arc::new(AtomicBool::new(true));
    let ticker = spawn_ticker(handle, alive.clone());
    alive.store(false, Ordering::Relaxed);
    // Joins within one tick; a leaked ticker would hang the test here.
    ticker.join().unwrap();
}

#[test]
fn fresh_readout_has_unit_duration() {
    // A unit duration keeps progress ratios finite before metadata lands.
    let info = NowPlayingInfo::default();
    assert_eq!(info.duration_millis, 1);
    assert_eq!(info.position_millis, 0);
    assert!(!info.playing);
    assert!(info.track.is_none());
    assert!(info.last_error.is_none());
}
