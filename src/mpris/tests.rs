use super::*;

fn demo_track() -> Track {
    Track {
        id: "3135556".to_string(),
        title: "Harder, Better, Faster, Stronger".to_string(),
        artist: "Daft Punk".to_string(),
        artwork: "https://cdn.example.com/cover/3135556.jpg".to_string(),
        audio: "https://cdn.example.com/preview/3135556.mp3".to_string(),
    }
}

#[test]
fn playback_status_maps_to_mpris_strings() {
    assert_eq!(status_str(PlaybackState::Stopped), "Stopped");
    assert_eq!(status_str(PlaybackState::Playing), "Playing");
    assert_eq!(status_str(PlaybackState::Paused), "Paused");
}

#[test]
fn string_values_convert_for_dbus() {
    // Conversion is fallible at the type level only; plain strings
    // always make it into the map.
    assert!(owned_string(String::new()).is_ok());
    assert!(owned_string("Harder, Better, Faster, Stronger".to_string()).is_ok());
}

#[test]
fn metadata_map_carries_the_track_fields() {
    let handle = MprisHandle {
        state: Arc::new(Mutex::new(SharedState::default())),
    };
    handle.set_track_metadata(Some(&demo_track()), Some(224_000_000));

    let state = handle.state.lock().unwrap();
    let map = metadata_map(&state);
    assert!(map.contains_key("xesam:title"));
    assert!(map.contains_key("xesam:artist"));
    assert!(map.contains_key("mpris:artUrl"));
    assert!(map.contains_key("xesam:url"));
    assert!(map.contains_key("mpris:length"));
}

#[test]
fn metadata_map_without_a_track_only_has_an_empty_title() {
    let state = SharedState::default();
    let map = metadata_map(&state);
    assert!(map.contains_key("xesam:title"));
    assert!(!map.contains_key("xesam:artist"));
    assert!(!map.contains_key("mpris:artUrl"));
    assert!(!map.contains_key("mpris:length"));
}

#[test]
fn clearing_the_track_drops_every_field() {
    let handle = MprisHandle {
        state: Arc::new(Mutex::new(SharedState::default())),
    };
    handle.set_track_metadata(Some(&demo_track()), Some(224_000_000));
    handle.set_track_metadata(None, None);

    let state = handle.state.lock().unwrap();
    assert!(state.title.is_none());
    assert!(state.artist.is_none());
    assert!(state.artwork_url.is_none());
    assert!(state.stream_url.is_none());
    assert!(state.length_micros.is_none());
}

#[test]
fn blank_urls_are_not_published() {
    let mut track = demo_track();
    track.artwork = String::new();
    track.audio = String::new();

    let handle = MprisHandle {
        state: Arc::new(Mutex::new(SharedState::default())),
    };
    handle.set_track_metadata(Some(&track), None);

    let state = handle.state.lock().unwrap();
    assert!(state.artwork_url.is_none());
    assert!(state.stream_url.is_none());
}
