use super::schema::*;
use super::types::Track;

#[test]
fn chart_tracks_envelope_maps_nested_fields() {
    let json = r#"{
        "data": [
            {
                "id": 3135556,
                "title": "Harder, Better, Faster, Stronger",
                "preview": "https://cdn.example.com/3135556.mp3",
                "artist": { "id": 27, "name": "Daft Punk" },
                "album": { "id": 302127, "cover_medium": "https://cdn.example.com/302127.jpg" }
            }
        ]
    }"#;

    let envelope: Envelope<TrackPayload> = serde_json::from_str(json).unwrap();
    let tracks: Vec<Track> = envelope
        .data
        .into_iter()
        .map(TrackPayload::into_track)
        .collect();

    assert_eq!(
        tracks,
        vec![Track {
            id: "3135556".to_string(),
            title: "Harder, Better, Faster, Stronger".to_string(),
            artist: "Daft Punk".to_string(),
            artwork: "https://cdn.example.com/302127.jpg".to_string(),
            audio: "https://cdn.example.com/3135556.mp3".to_string(),
        }]
    );
}

#[test]
fn track_payload_tolerates_missing_album_and_preview() {
    let json = r#"{
        "id": 1,
        "title": "Untitled",
        "artist": { "name": "Unknown" }
    }"#;

    let payload: TrackPayload = serde_json::from_str(json).unwrap();
    let track = payload.into_track();
    assert_eq!(track.artwork, "");
    assert_eq!(track.audio, "");
}

#[test]
fn empty_or_missing_data_array_yields_no_tracks() {
    let envelope: Envelope<TrackPayload> = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(envelope.data.is_empty());

    let envelope: Envelope<TrackPayload> = serde_json::from_str("{}").unwrap();
    assert!(envelope.data.is_empty());
}

#[test]
fn genre_zero_is_not_browsable() {
    let json = r#"{
        "data": [
            { "id": 0, "name": "Podcasts", "picture_medium": "" },
            { "id": 132, "name": "Pop", "picture_medium": "https://cdn.example.com/pop.jpg" }
        ]
    }"#;

    let envelope: Envelope<GenrePayload> = serde_json::from_str(json).unwrap();
    let genres: Vec<_> = envelope
        .data
        .into_iter()
        .filter(GenrePayload::is_browsable)
        .map(GenrePayload::into_genre)
        .collect();

    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].id, "132");
    assert_eq!(genres[0].name, "Pop");
}

#[test]
fn playlist_detail_splits_metadata_and_tracks() {
    let json = r#"{
        "id": 908622995,
        "title": "Chill Hits",
        "picture_medium": "https://cdn.example.com/chill.jpg",
        "tracks": {
            "data": [
                {
                    "id": 5,
                    "title": "Breathe",
                    "preview": "https://cdn.example.com/5.mp3",
                    "artist": { "name": "Pink Floyd" },
                    "album": { "cover_medium": "https://cdn.example.com/dsotm.jpg" }
                }
            ]
        }
    }"#;

    let detail: PlaylistDetailPayload = serde_json::from_str(json).unwrap();
    let (playlist, tracks) = detail.split();

    assert_eq!(playlist.id, "908622995");
    assert_eq!(playlist.title, "Chill Hits");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist, "Pink Floyd");
}

#[test]
fn lyrics_payload_requires_exact_match_and_non_blank_text() {
    let exact = r#"{"type": "exact", "mus": [{"text": "la la la"}]}"#;
    let payload: LyricsPayload = serde_json::from_str(exact).unwrap();
    assert_eq!(payload.into_text().as_deref(), Some("la la la"));

    let approx = r#"{"type": "aprox", "mus": [{"text": "nope"}]}"#;
    let payload: LyricsPayload = serde_json::from_str(approx).unwrap();
    assert_eq!(payload.into_text(), None);

    let blank = r#"{"type": "exact", "mus": [{"text": "   "}]}"#;
    let payload: LyricsPayload = serde_json::from_str(blank).unwrap();
    assert_eq!(payload.into_text(), None);

    let empty = r#"{"type": "exact", "mus": []}"#;
    let payload: LyricsPayload = serde_json::from_str(empty).unwrap();
    assert_eq!(payload.into_text(), None);
}
