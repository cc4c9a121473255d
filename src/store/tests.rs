use super::kv::{JsonFileStore, KvStore, MemoryStore};
use super::library::MusicLibrary;
use crate::catalog::{Artist, Playlist, Track};

fn track(id: &str, title: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: "Artist".to_string(),
        artwork: format!("https://cdn.example.com/{id}.jpg"),
        audio: format!("https://cdn.example.com/{id}.mp3"),
    }
}

fn mem_library() -> MusicLibrary {
    MusicLibrary::new(Box::new(MemoryStore::new()))
}

#[test]
fn toggle_favorite_twice_restores_membership_and_order() {
    let library = mem_library();
    for (i, t) in ["a", "b", "c"].iter().enumerate() {
        library
            .toggle_favorite(&track(t, &format!("Track {i}")))
            .unwrap();
    }
    let before = library.favorites();

    let extra = track("d", "Track d");
    assert!(library.toggle_favorite(&extra).unwrap());
    assert!(library.is_favorite("d"));
    assert!(!library.toggle_favorite(&extra).unwrap());
    assert!(!library.is_favorite("d"));

    assert_eq!(library.favorites(), before);
}

#[test]
fn toggling_an_existing_favorite_removes_only_that_track() {
    let library = mem_library();
    let a = track("a", "A");
    let b = track("b", "B");
    library.toggle_favorite(&a).unwrap();
    library.toggle_favorite(&b).unwrap();

    library.toggle_favorite(&a).unwrap();
    let favorites = library.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, "b");
}

#[test]
fn follow_and_like_toggles_mirror_favorites() {
    let library = mem_library();
    let artist = Artist {
        id: "27".to_string(),
        name: "Daft Punk".to_string(),
        picture: String::new(),
    };
    let playlist = Playlist {
        id: "9".to_string(),
        title: "Chill".to_string(),
        picture: String::new(),
    };

    assert!(library.toggle_follow(&artist).unwrap());
    assert!(library.is_following("27"));
    assert!(!library.toggle_follow(&artist).unwrap());
    assert!(library.followed_artists().is_empty());

    assert!(library.toggle_like(&playlist).unwrap());
    assert!(library.is_liked("9"));
    assert!(!library.toggle_like(&playlist).unwrap());
    assert!(library.liked_playlists().is_empty());
}

#[test]
fn search_history_dedupes_front_inserts_and_caps_at_five() {
    let library = mem_library();
    for term in ["one", "two", "three", "four", "five", "six"] {
        library.push_search_term(term).unwrap();
    }
    assert_eq!(
        library.search_history(),
        vec!["six", "five", "four", "three", "two"]
    );

    // Re-searching an existing term moves it to the front without growing.
    library.push_search_term("three").unwrap();
    assert_eq!(
        library.search_history(),
        vec!["three", "six", "five", "four", "two"]
    );
}

#[test]
fn search_history_remove_and_clear() {
    let library = mem_library();
    library.push_search_term("keep").unwrap();
    library.push_search_term("drop").unwrap();

    library.remove_search_term("drop").unwrap();
    assert_eq!(library.search_history(), vec!["keep"]);

    library.clear_search_history().unwrap();
    assert!(library.search_history().is_empty());
}

#[test]
fn blank_search_terms_are_ignored() {
    let library = mem_library();
    library.push_search_term("   ").unwrap();
    assert!(library.search_history().is_empty());
}

#[test]
fn now_playing_snapshot_set_get_clear() {
    let library = mem_library();
    assert!(library.now_playing().is_none());

    let t = track("42", "Answer");
    library.set_now_playing(Some(&t)).unwrap();
    assert_eq!(library.now_playing(), Some(t));

    library.set_now_playing(None).unwrap();
    assert!(library.now_playing().is_none());
}

#[test]
fn corrupt_entries_fall_back_to_empty_defaults() {
    let store = MemoryStore::new();
    store.write_raw("favorites", "not json at all").unwrap();
    store.write_raw("search_history", "{\"nope\": 1}").unwrap();
    let library = MusicLibrary::new(Box::new(store));

    assert!(library.favorites().is_empty());
    assert!(library.search_history().is_empty());

    // A mutation rewrites the entry into a sane state.
    library.push_search_term("reset").unwrap();
    assert_eq!(library.search_history(), vec!["reset"]);
}

#[test]
fn json_file_store_persists_entries_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().to_path_buf());

    store.write_raw("favorites", "[1,2,3]").unwrap();
    assert_eq!(store.read_raw("favorites").as_deref(), Some("[1,2,3]"));
    assert!(dir.path().join("favorites.json").is_file());

    assert!(store.read_raw("missing").is_none());
    // Removing a missing entry is not an error.
    store.remove("missing").unwrap();

    store.remove("favorites").unwrap();
    assert!(store.read_raw("favorites").is_none());
}

#[test]
fn json_file_store_backed_library_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let library = MusicLibrary::new(Box::new(JsonFileStore::new(dir.path().to_path_buf())));

    let t = track("7", "Seven");
    library.toggle_favorite(&t).unwrap();

    // A fresh repository over the same directory sees the same data.
    let reopened = MusicLibrary::new(Box::new(JsonFileStore::new(dir.path().to_path_buf())));
    assert_eq!(reopened.favorites(), vec![t]);
}
