//! Background fetch worker.
//!
//! Catalog calls block on the network, so they run on a dedicated thread:
//! requests go in as [`CatalogCmd`], results come back as [`CatalogEvent`]
//! and are drained by the event loop with `try_recv`. Failed calls turn
//! into empty results plus a `Failed` event; nothing propagates.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use super::client::CatalogClient;
use super::types::{Artist, Genre, Playlist, Track};

#[derive(Debug)]
pub enum CatalogCmd {
    Trending,
    TopArtists,
    TopPlaylists,
    Genres,
    GenreTracks { genre_id: String },
    Playlist { id: String },
    Artist { id: String },
    Search { query: String },
    Lyrics { track_id: String, artist: String, title: String },
    Quit,
}

#[derive(Debug)]
pub enum CatalogEvent {
    Trending(Vec<Track>),
    TopArtists(Vec<Artist>),
    TopPlaylists(Vec<Playlist>),
    Genres(Vec<Genre>),
    GenreTracks { genre_id: String, tracks: Vec<Track> },
    Playlist { playlist: Option<Playlist>, tracks: Vec<Track> },
    Artist { artist: Option<Artist>, tracks: Vec<Track> },
    SearchResults { query: String, tracks: Vec<Track> },
    Lyrics { track_id: String, text: String },
    /// A call failed; the matching data event already carried the empty
    /// fallback, this is only for the status line.
    Failed(String),
}

pub struct CatalogWorker {
    tx: Sender<CatalogCmd>,
    rx: Receiver<CatalogEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl CatalogWorker {
    pub fn spawn(client: CatalogClient) -> Self {
        let (tx, cmd_rx) = mpsc::channel::<CatalogCmd>();
        let (event_tx, rx) = mpsc::channel::<CatalogEvent>();

        let join = thread::spawn(move || run_worker(client, cmd_rx, event_tx));

        Self {
            tx,
            rx,
            join: Mutex::new(Some(join)),
        }
    }

    pub fn request(&self, cmd: CatalogCmd) {
        let _ = self.tx.send(cmd);
    }

    pub fn try_recv(&self) -> Result<CatalogEvent, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(CatalogCmd::Quit);
        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

fn run_worker(client: CatalogClient, rx: Receiver<CatalogCmd>, tx: Sender<CatalogEvent>) {
    while let Ok(cmd) = rx.recv() {
        let event = match cmd {
            CatalogCmd::Trending => match client.trending_tracks() {
                Ok(tracks) => CatalogEvent::Trending(tracks),
                Err(e) => fail(&tx, CatalogEvent::Trending(Vec::new()), e),
            },
            CatalogCmd::TopArtists => match client.top_artists() {
                Ok(artists) => CatalogEvent::TopArtists(artists),
                Err(e) => fail(&tx, CatalogEvent::TopArtists(Vec::new()), e),
            },
            CatalogCmd::TopPlaylists => match client.top_playlists() {
                Ok(playlists) => CatalogEvent::TopPlaylists(playlists),
                Err(e) => fail(&tx, CatalogEvent::TopPlaylists(Vec::new()), e),
            },
            CatalogCmd::Genres => match client.genres() {
                Ok(genres) => CatalogEvent::Genres(genres),
                Err(e) => fail(&tx, CatalogEvent::Genres(Vec::new()), e),
            },
            CatalogCmd::GenreTracks { genre_id } => match client.tracks_by_genre(&genre_id) {
                Ok(tracks) => CatalogEvent::GenreTracks { genre_id, tracks },
                Err(e) => fail(
                    &tx,
                    CatalogEvent::GenreTracks {
                        genre_id,
                        tracks: Vec::new(),
                    },
                    e,
                ),
            },
            CatalogCmd::Playlist { id } => match client.playlist(&id) {
                Ok((playlist, tracks)) => CatalogEvent::Playlist {
                    playlist: Some(playlist),
                    tracks,
                },
                Err(e) => fail(
                    &tx,
                    CatalogEvent::Playlist {
                        playlist: None,
                        tracks: Vec::new(),
                    },
                    e,
                ),
            },
            CatalogCmd::Artist { id } => {
                // Two upstream calls; the top-tracks list may still load
                // when the detail lookup fails.
                let artist = client.artist(&id);
                let tracks = client.artist_top_tracks(&id).unwrap_or_default();
                match artist {
                    Ok(artist) => CatalogEvent::Artist {
                        artist: Some(artist),
                        tracks,
                    },
                    Err(e) => fail(&tx, CatalogEvent::Artist { artist: None, tracks }, e),
                }
            }
            CatalogCmd::Search { query } => match client.search_tracks(&query) {
                Ok(tracks) => CatalogEvent::SearchResults { query, tracks },
                Err(e) => fail(
                    &tx,
                    CatalogEvent::SearchResults {
                        query,
                        tracks: Vec::new(),
                    },
                    e,
                ),
            },
            CatalogCmd::Lyrics {
                track_id,
                artist,
                title,
            } => CatalogEvent::Lyrics {
                track_id,
                text: client.lyrics(&artist, &title),
            },
            CatalogCmd::Quit => break,
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}

fn fail(
    tx: &Sender<CatalogEvent>,
    fallback: CatalogEvent,
    error: super::client::CatalogError,
) -> CatalogEvent {
    let _ = tx.send(CatalogEvent::Failed(error.to_string()));
    fallback
}
