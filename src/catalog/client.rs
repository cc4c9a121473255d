use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CatalogSettings;

use super::schema::{
    ArtistPayload, Envelope, GenrePayload, LyricsPayload, PlaylistDetailPayload, PlaylistPayload,
    TrackPayload,
};
use super::types::{Artist, Genre, Playlist, Track};

/// Shown in the lyrics panel whenever the lookup misses or fails.
pub const LYRICS_FALLBACK: &str = "Lyrics not available for this track.";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Read-only client for the remote music catalog.
///
/// Single attempt per call, no retries. Callers that feed the UI go
/// through [`super::worker`], which turns errors into empty results.
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    base_url: String,
    lyrics_base_url: String,
    chart_limit: u32,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            lyrics_base_url: settings.lyrics_base_url.trim_end_matches('/').to_string(),
            chart_limit: settings.chart_limit,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    pub fn trending_tracks(&self) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/chart/0/tracks?limit={}", self.base_url, self.chart_limit);
        let envelope: Envelope<TrackPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(TrackPayload::into_track)
            .collect())
    }

    pub fn top_artists(&self) -> Result<Vec<Artist>, CatalogError> {
        let url = format!("{}/chart/0/artists?limit={}", self.base_url, self.chart_limit);
        let envelope: Envelope<ArtistPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(ArtistPayload::into_artist)
            .collect())
    }

    pub fn top_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        let url = format!(
            "{}/chart/0/playlists?limit={}",
            self.base_url, self.chart_limit
        );
        let envelope: Envelope<PlaylistPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(PlaylistPayload::into_playlist)
            .collect())
    }

    pub fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let url = format!("{}/genre", self.base_url);
        let envelope: Envelope<GenrePayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .filter(GenrePayload::is_browsable)
            .map(GenrePayload::into_genre)
            .collect())
    }

    pub fn tracks_by_genre(&self, genre_id: &str) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/chart/{}/tracks", self.base_url, genre_id);
        let envelope: Envelope<TrackPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(TrackPayload::into_track)
            .collect())
    }

    /// Playlist metadata and its tracks come back in a single payload.
    pub fn playlist(&self, id: &str) -> Result<(Playlist, Vec<Track>), CatalogError> {
        let url = format!("{}/playlist/{}", self.base_url, id);
        let detail: PlaylistDetailPayload = self.get_json(&url)?;
        Ok(detail.split())
    }

    pub fn artist(&self, id: &str) -> Result<Artist, CatalogError> {
        let url = format!("{}/artist/{}", self.base_url, id);
        let payload: ArtistPayload = self.get_json(&url)?;
        Ok(payload.into_artist())
    }

    pub fn artist_top_tracks(&self, id: &str) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/artist/{}/top?limit=50", self.base_url, id);
        let envelope: Envelope<TrackPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(TrackPayload::into_track)
            .collect())
    }

    pub fn search_tracks(&self, query: &str) -> Result<Vec<Track>, CatalogError> {
        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let envelope: Envelope<TrackPayload> = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .map(TrackPayload::into_track)
            .collect())
    }

    /// Lyrics lookup by artist + title. Infallible at the surface: any
    /// transport/parse error or a non-exact match yields the fallback text.
    pub fn lyrics(&self, artist: &str, title: &str) -> String {
        let url = format!(
            "{}/search.php?art={}&mus={}",
            self.lyrics_base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );

        match self.get_json::<LyricsPayload>(&url) {
            Ok(payload) => payload
                .into_text()
                .unwrap_or_else(|| LYRICS_FALLBACK.to_string()),
            Err(_) => LYRICS_FALLBACK.to_string(),
        }
    }
}
