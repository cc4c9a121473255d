use crate::app::App;
use crate::catalog::{CatalogCmd, CatalogWorker};
use crate::store::MusicLibrary;

/// Kick off the initial catalog fetches and load the saved library state.
///
/// The catalog results arrive asynchronously through the event loop; the
/// saved lists are read synchronously since they live on local disk.
pub fn prime(app: &mut App, catalog: &CatalogWorker, library: &MusicLibrary) {
    catalog.request(CatalogCmd::Trending);
    catalog.request(CatalogCmd::TopArtists);
    catalog.request(CatalogCmd::TopPlaylists);
    catalog.request(CatalogCmd::Genres);

    app.favorites = library.favorites();
    app.followed_artists = library.followed_artists();
    app.liked_playlists = library.liked_playlists();
    app.search_history = library.search_history();
}
