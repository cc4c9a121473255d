//! Application model types: `App`, `Screen` and `PlaybackState`.
//!
//! The `App` struct holds the navigation stack, the auth form, the data
//! fetched for each screen and the cursors the UI renders against. It owns
//! no I/O: the runtime feeds it catalog events and library snapshots.

use crate::catalog::{Artist, Genre, Playlist, Track};
use crate::player::NowPlayingHandle;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// One entry on the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Search,
    SearchResults,
    GenreTracks { genre_id: String, name: String },
    Library,
    Artist { id: String },
    Playlist { id: String },
    Player,
}

/// Which field of the auth form holds focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

/// Which column of the home screen holds focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HomeSection {
    Trending,
    Artists,
    Playlists,
}

/// Which pane of the search-results screen holds focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    History,
    Results,
}

/// Which tab of the library screen is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LibraryTab {
    Playlists,
    Artists,
    Tracks,
}

/// The main application model.
pub struct App {
    screens: Vec<Screen>,
    pub status: Option<String>,

    // Auth form. Submission only moves the navigation stack; there is no
    // account backend behind it.
    pub register_mode: bool,
    pub auth_focus: AuthField,
    pub auth_name: String,
    pub auth_email: String,
    pub auth_password: String,

    // Home.
    pub home_section: HomeSection,
    pub trending: Vec<Track>,
    pub trending_sel: usize,
    pub top_artists: Vec<Artist>,
    pub top_artists_sel: usize,
    pub top_playlists: Vec<Playlist>,
    pub top_playlists_sel: usize,
    pub home_loading: bool,

    // Search.
    pub genres: Vec<Genre>,
    pub genres_sel: usize,
    pub search_focus: SearchFocus,
    pub search_input: String,
    pub search_results: Vec<Track>,
    pub search_results_sel: usize,
    pub search_history: Vec<String>,
    pub search_history_sel: usize,
    pub search_pending: Option<String>,

    // Genre detail.
    pub genre_tracks: Vec<Track>,
    pub genre_tracks_sel: usize,
    pub genre_loading: bool,

    // Library. The lists mirror what `MusicLibrary` has on disk.
    pub library_tab: LibraryTab,
    pub favorites: Vec<Track>,
    pub favorites_sel: usize,
    pub followed_artists: Vec<Artist>,
    pub followed_artists_sel: usize,
    pub liked_playlists: Vec<Playlist>,
    pub liked_playlists_sel: usize,

    // Artist / playlist detail.
    pub artist: Option<Artist>,
    pub artist_tracks: Vec<Track>,
    pub artist_tracks_sel: usize,
    pub artist_followed: bool,
    pub artist_loading: bool,
    pub playlist: Option<Playlist>,
    pub playlist_tracks: Vec<Track>,
    pub playlist_tracks_sel: usize,
    pub playlist_liked: bool,
    pub playlist_loading: bool,

    // Player screen.
    pub lyrics: Option<String>,
    pub lyrics_track_id: Option<String>,
    pub lyrics_scroll: u16,
    pub player_favorite: bool,

    pub playback: PlaybackState,
    pub now_playing: Option<NowPlayingHandle>,
}

impl App {
    /// Create a new `App` starting on the login screen.
    pub fn new() -> Self {
        Self {
            screens: vec![Screen::Login],
            status: None,

            register_mode: false,
            auth_focus: AuthField::Email,
            auth_name: String::new(),
            auth_email: String::new(),
            auth_password: String::new(),

            home_section: HomeSection::Trending,
            trending: Vec::new(),
            trending_sel: 0,
            top_artists: Vec::new(),
            top_artists_sel: 0,
            top_playlists: Vec::new(),
            top_playlists_sel: 0,
            home_loading: true,

            genres: Vec::new(),
            genres_sel: 0,
            search_focus: SearchFocus::Input,
            search_input: String::new(),
            search_results: Vec::new(),
            search_results_sel: 0,
            search_history: Vec::new(),
            search_history_sel: 0,
            search_pending: None,

            genre_tracks: Vec::new(),
            genre_tracks_sel: 0,
            genre_loading: false,

            library_tab: LibraryTab::Playlists,
            favorites: Vec::new(),
            favorites_sel: 0,
            followed_artists: Vec::new(),
            followed_artists_sel: 0,
            liked_playlists: Vec::new(),
            liked_playlists_sel: 0,

            artist: None,
            artist_tracks: Vec::new(),
            artist_tracks_sel: 0,
            artist_followed: false,
            artist_loading: false,
            playlist: None,
            playlist_tracks: Vec::new(),
            playlist_tracks_sel: 0,
            playlist_liked: false,
            playlist_loading: false,

            lyrics: None,
            lyrics_track_id: None,
            lyrics_scroll: 0,
            player_favorite: false,

            playback: PlaybackState::Stopped,
            now_playing: None,
        }
    }

    /// The screen currently on top of the navigation stack.
    pub fn screen(&self) -> &Screen {
        // The stack is never emptied; `go_back` refuses to pop the root.
        static ROOT: Screen = Screen::Login;
        self.screens.last().unwrap_or(&ROOT)
    }

    /// Push `screen` onto the navigation stack.
    pub fn navigate(&mut self, screen: Screen) {
        if self.screens.last() == Some(&screen) {
            return;
        }
        self.screens.push(screen);
    }

    /// Replace the whole stack with `screen` (used for the tab row, so the
    /// back key never tunnels through old tab history).
    pub fn navigate_root(&mut self, screen: Screen) {
        self.screens.clear();
        self.screens.push(screen);
    }

    /// Pop the top screen. Returns false when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.screens.len() <= 1 {
            return false;
        }
        self.screens.pop();
        true
    }

    /// Leave the auth screen after a submitted form.
    pub fn complete_login(&mut self) {
        self.auth_password.clear();
        self.navigate_root(Screen::Home);
    }

    /// Cycle the auth form focus over the visible fields.
    pub fn auth_focus_next(&mut self) {
        self.auth_focus = match (self.auth_focus, self.register_mode) {
            (AuthField::Name, _) => AuthField::Email,
            (AuthField::Email, _) => AuthField::Password,
            (AuthField::Password, true) => AuthField::Name,
            (AuthField::Password, false) => AuthField::Email,
        };
    }

    pub fn auth_focus_prev(&mut self) {
        self.auth_focus = match (self.auth_focus, self.register_mode) {
            (AuthField::Name, _) => AuthField::Password,
            (AuthField::Email, true) => AuthField::Name,
            (AuthField::Email, false) => AuthField::Password,
            (AuthField::Password, _) => AuthField::Email,
        };
    }

    /// Flip between the login and register forms.
    pub fn toggle_register_mode(&mut self) {
        self.register_mode = !self.register_mode;
        self.auth_focus = if self.register_mode {
            AuthField::Name
        } else {
            AuthField::Email
        };
    }

    /// The auth field currently focused, as a mutable string.
    pub fn auth_field_mut(&mut self) -> &mut String {
        match self.auth_focus {
            AuthField::Name => &mut self.auth_name,
            AuthField::Email => &mut self.auth_email,
            AuthField::Password => &mut self.auth_password,
        }
    }

    /// Cycle the home screen focus one column to the right.
    pub fn home_section_next(&mut self) {
        self.home_section = match self.home_section {
            HomeSection::Trending => HomeSection::Artists,
            HomeSection::Artists => HomeSection::Playlists,
            HomeSection::Playlists => HomeSection::Trending,
        };
    }

    /// Cycle the home screen focus one column to the left.
    pub fn home_section_prev(&mut self) {
        self.home_section = match self.home_section {
            HomeSection::Trending => HomeSection::Playlists,
            HomeSection::Artists => HomeSection::Trending,
            HomeSection::Playlists => HomeSection::Artists,
        };
    }

    /// Cursor and length of the focused home column.
    pub fn home_cursor(&mut self) -> (&mut usize, usize) {
        match self.home_section {
            HomeSection::Trending => (&mut self.trending_sel, self.trending.len()),
            HomeSection::Artists => (&mut self.top_artists_sel, self.top_artists.len()),
            HomeSection::Playlists => (&mut self.top_playlists_sel, self.top_playlists.len()),
        }
    }

    /// Cycle the library tab one step to the right.
    pub fn library_tab_next(&mut self) {
        self.library_tab = match self.library_tab {
            LibraryTab::Playlists => LibraryTab::Artists,
            LibraryTab::Artists => LibraryTab::Tracks,
            LibraryTab::Tracks => LibraryTab::Playlists,
        };
    }

    /// Cycle the library tab one step to the left.
    pub fn library_tab_prev(&mut self) {
        self.library_tab = match self.library_tab {
            LibraryTab::Playlists => LibraryTab::Tracks,
            LibraryTab::Artists => LibraryTab::Playlists,
            LibraryTab::Tracks => LibraryTab::Artists,
        };
    }

    /// Cursor and length of the active library tab.
    pub fn library_cursor(&mut self) -> (&mut usize, usize) {
        match self.library_tab {
            LibraryTab::Playlists => (&mut self.liked_playlists_sel, self.liked_playlists.len()),
            LibraryTab::Artists => (&mut self.followed_artists_sel, self.followed_artists.len()),
            LibraryTab::Tracks => (&mut self.favorites_sel, self.favorites.len()),
        }
    }

    /// Cycle the search-results focus downward: input, history, results.
    pub fn search_focus_next(&mut self) {
        self.search_focus = match self.search_focus {
            SearchFocus::Input => SearchFocus::History,
            SearchFocus::History => SearchFocus::Results,
            SearchFocus::Results => SearchFocus::Input,
        };
    }

    /// Cycle the search-results focus upward.
    pub fn search_focus_prev(&mut self) {
        self.search_focus = match self.search_focus {
            SearchFocus::Input => SearchFocus::Results,
            SearchFocus::History => SearchFocus::Input,
            SearchFocus::Results => SearchFocus::History,
        };
    }

    /// Replace the lyrics panel contents for `track_id`.
    pub fn set_lyrics(&mut self, track_id: String, text: String) {
        self.lyrics = Some(text);
        self.lyrics_track_id = Some(track_id);
        self.lyrics_scroll = 0;
    }

    /// Drop lyrics state when the current track changes.
    pub fn clear_lyrics(&mut self) {
        self.lyrics = None;
        self.lyrics_track_id = None;
        self.lyrics_scroll = 0;
    }

    /// Attach the shared playback readout produced by the player thread.
    pub fn set_now_playing_handle(&mut self, h: NowPlayingHandle) {
        self.now_playing = Some(h);
    }

    /// Snapshot of the current playback readout, if the player is attached.
    pub fn playback_snapshot(&self) -> Option<crate::player::NowPlayingInfo> {
        let handle = self.now_playing.as_ref()?;
        handle.lock().ok().map(|info| info.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `*cursor` one step down in a list of `len`, wrapping at the end.
pub fn select_next(cursor: &mut usize, len: usize) {
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = (*cursor + 1) % len;
}

/// Move `*cursor` one step up in a list of `len`, wrapping at the start.
pub fn select_prev(cursor: &mut usize, len: usize) {
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = (*cursor + len - 1) % len;
}

/// Fold a possibly-stale cursor back into bounds after a list changed.
pub fn clamp_cursor(cursor: &mut usize, len: usize) {
    if len == 0 {
        *cursor = 0;
    } else if *cursor >= len {
        *cursor = len - 1;
    }
}
