use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{Artist, Playlist, Track};

use super::kv::{KvStore, StoreError};

const FAVORITES: &str = "favorites";
const FOLLOWED_ARTISTS: &str = "followed_artists";
const LIKED_PLAYLISTS: &str = "liked_playlists";
const SEARCH_HISTORY: &str = "search_history";
const NOW_PLAYING: &str = "now_playing";

/// How many recent search terms are kept, most recent first.
const SEARCH_HISTORY_CAP: usize = 5;

/// Typed repository over the key-value store.
///
/// Every mutation is read-modify-write on a single entry. Unreadable or
/// corrupt entries fall back to the empty default and are rewritten on
/// the next mutation.
pub struct MusicLibrary {
    store: Box<dyn KvStore>,
}

impl MusicLibrary {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.store
            .read_raw(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<(), StoreError> {
        // Serializing a vec of plain owned values cannot fail; fall back
        // to the empty list just in case.
        let raw = serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string());
        self.store.write_raw(key, &raw)
    }

    // --- favorite tracks ---

    pub fn favorites(&self) -> Vec<Track> {
        self.read_list(FAVORITES)
    }

    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.favorites().iter().any(|t| t.id == track_id)
    }

    /// Returns `true` when the track is a favorite after the toggle.
    pub fn toggle_favorite(&self, track: &Track) -> Result<bool, StoreError> {
        let mut favorites = self.favorites();
        let added = if favorites.iter().any(|t| t.id == track.id) {
            favorites.retain(|t| t.id != track.id);
            false
        } else {
            favorites.push(track.clone());
            true
        };
        self.write_list(FAVORITES, &favorites)?;
        Ok(added)
    }

    // --- followed artists ---

    pub fn followed_artists(&self) -> Vec<Artist> {
        self.read_list(FOLLOWED_ARTISTS)
    }

    pub fn is_following(&self, artist_id: &str) -> bool {
        self.followed_artists().iter().any(|a| a.id == artist_id)
    }

    pub fn toggle_follow(&self, artist: &Artist) -> Result<bool, StoreError> {
        let mut followed = self.followed_artists();
        let added = if followed.iter().any(|a| a.id == artist.id) {
            followed.retain(|a| a.id != artist.id);
            false
        } else {
            followed.push(artist.clone());
            true
        };
        self.write_list(FOLLOWED_ARTISTS, &followed)?;
        Ok(added)
    }

    // --- liked playlists ---

    pub fn liked_playlists(&self) -> Vec<Playlist> {
        self.read_list(LIKED_PLAYLISTS)
    }

    pub fn is_liked(&self, playlist_id: &str) -> bool {
        self.liked_playlists().iter().any(|p| p.id == playlist_id)
    }

    pub fn toggle_like(&self, playlist: &Playlist) -> Result<bool, StoreError> {
        let mut liked = self.liked_playlists();
        let added = if liked.iter().any(|p| p.id == playlist.id) {
            liked.retain(|p| p.id != playlist.id);
            false
        } else {
            liked.push(playlist.clone());
            true
        };
        self.write_list(LIKED_PLAYLISTS, &liked)?;
        Ok(added)
    }

    // --- search history ---

    pub fn search_history(&self) -> Vec<String> {
        self.read_list(SEARCH_HISTORY)
    }

    /// Move-or-insert `term` to the front, dropping duplicates and
    /// anything past the cap.
    pub fn push_search_term(&self, term: &str) -> Result<(), StoreError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }

        let mut history = self.search_history();
        history.retain(|h| h != term);
        history.insert(0, term.to_string());
        history.truncate(SEARCH_HISTORY_CAP);
        self.write_list(SEARCH_HISTORY, &history)
    }

    pub fn remove_search_term(&self, term: &str) -> Result<(), StoreError> {
        let mut history = self.search_history();
        history.retain(|h| h != term);
        self.write_list(SEARCH_HISTORY, &history)
    }

    pub fn clear_search_history(&self) -> Result<(), StoreError> {
        self.store.remove(SEARCH_HISTORY)
    }

    // --- now-playing snapshot ---

    pub fn now_playing(&self) -> Option<Track> {
        self.store
            .read_raw(NOW_PLAYING)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn set_now_playing(&self, track: Option<&Track>) -> Result<(), StoreError> {
        match track {
            Some(track) => {
                let raw = serde_json::to_string(track).unwrap_or_else(|_| "null".to_string());
                self.store.write_raw(NOW_PLAYING, &raw)
            }
            None => self.store.remove(NOW_PLAYING),
        }
    }
}
