//! Serde schemas for the upstream catalog payloads.
//!
//! The remote API is loosely shaped; these structs are the only place its
//! field names appear. Each payload maps into the owned types from
//! `catalog::types`, so upstream shape changes stay contained here.

use serde::Deserialize;

use super::types::{Artist, Genre, Playlist, Track};

/// The `{"data": [...]}` envelope most list endpoints use.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrackPayload {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub preview: String,
    pub artist: ArtistRef,
    #[serde(default)]
    pub album: Option<AlbumRef>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AlbumRef {
    #[serde(default)]
    pub cover_medium: String,
}

impl TrackPayload {
    pub fn into_track(self) -> Track {
        Track {
            id: self.id.to_string(),
            title: self.title,
            artist: self.artist.name,
            artwork: self.album.map(|a| a.cover_medium).unwrap_or_default(),
            audio: self.preview,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistPayload {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub picture_medium: String,
}

impl ArtistPayload {
    pub fn into_artist(self) -> Artist {
        Artist {
            id: self.id.to_string(),
            name: self.name,
            picture: self.picture_medium,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaylistPayload {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub picture_medium: String,
}

impl PlaylistPayload {
    pub fn into_playlist(self) -> Playlist {
        Playlist {
            id: self.id.to_string(),
            title: self.title,
            picture: self.picture_medium,
        }
    }
}

/// Full playlist detail: metadata plus a nested track envelope.
#[derive(Debug, Deserialize)]
pub(super) struct PlaylistDetailPayload {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub picture_medium: String,
    pub tracks: Envelope<TrackPayload>,
}

impl PlaylistDetailPayload {
    pub fn split(self) -> (Playlist, Vec<Track>) {
        let playlist = Playlist {
            id: self.id.to_string(),
            title: self.title,
            picture: self.picture_medium,
        };
        let tracks = self
            .tracks
            .data
            .into_iter()
            .map(TrackPayload::into_track)
            .collect();
        (playlist, tracks)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GenrePayload {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub picture_medium: String,
}

impl GenrePayload {
    /// The upstream chart exposes a pseudo-genre with id 0 ("Podcasts");
    /// callers filter it out of the browse grid.
    pub fn is_browsable(&self) -> bool {
        self.id != 0
    }

    pub fn into_genre(self) -> Genre {
        Genre {
            id: self.id.to_string(),
            name: self.name,
            picture: self.picture_medium,
        }
    }
}

/// Lyrics search response. `type` is "exact" when the artist+title pair
/// resolved; `mus` then carries at least one entry with the full text.
#[derive(Debug, Deserialize)]
pub(super) struct LyricsPayload {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default = "Vec::new")]
    pub mus: Vec<LyricsEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LyricsEntry {
    #[serde(default)]
    pub text: String,
}

impl LyricsPayload {
    pub fn into_text(self) -> Option<String> {
        if self.kind != "exact" {
            return None;
        }
        self.mus
            .into_iter()
            .map(|m| m.text)
            .find(|t| !t.trim().is_empty())
    }
}
