//! Remote music catalog: typed domain values, payload schemas, the HTTP
//! client and the background fetch worker.
//!
//! Everything the UI knows about tracks/artists/playlists comes from here.

mod client;
mod schema;
mod types;
mod worker;

pub use client::{CatalogClient, CatalogError, LYRICS_FALLBACK};
pub use types::{Artist, Genre, Playlist, Track};
pub use worker::{CatalogCmd, CatalogEvent, CatalogWorker};

#[cfg(test)]
mod tests;
