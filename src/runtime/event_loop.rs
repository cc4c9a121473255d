use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{
    App, HomeSection, LibraryTab, PlaybackState, Screen, SearchFocus, clamp_cursor, select_next,
    select_prev,
};
use crate::catalog::{CatalogCmd, CatalogEvent, CatalogWorker, Track};
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Player, PlayerCmd, SkipDirection};
use crate::runtime::mpris_sync::update_mpris;
use crate::store::MusicLibrary;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Track id last written to the restart snapshot and lyrics fetch.
    pub last_snapshot_track_id: Option<String>,
    /// Last-known track id as emitted to MPRIS.
    pub last_mpris_track_id: Option<String>,
    /// Last-known playback state as emitted to MPRIS.
    pub last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new(app: &App) -> Self {
        Self {
            last_snapshot_track_id: None,
            last_mpris_track_id: None,
            last_mpris_playback: app.playback,
        }
    }
}

/// Main terminal event loop: drains catalog events, mirrors the player
/// thread's readout into the app, draws, and handles input. Returns
/// `Ok(())` when shutdown is requested.
#[allow(clippy::too_many_arguments)]
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &Player,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = catalog.try_recv() {
            apply_catalog_event(app, library, ev);
        }

        sync_playback(app, catalog, library, state);

        // Keep MPRIS in sync even when changes come from auto-advance or
        // media keys.
        let track_id = current_track_id(app);
        if track_id != state.last_mpris_track_id || app.playback != state.last_mpris_playback {
            update_mpris(mpris, app);
            state.last_mpris_track_id = track_id;
            state.last_mpris_playback = app.playback;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, settings, app, player, library)? {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, catalog, library, control_tx)? {
                    return Ok(());
                }
            }
        }
    }
}

fn current_track_id(app: &App) -> Option<String> {
    app.playback_snapshot()
        .and_then(|info| info.track.map(|t| t.id))
}

/// Mirror the player thread's shared readout into the app: derive the
/// playback state and, when the track changed, persist the restart
/// snapshot and ask for fresh lyrics.
fn sync_playback(
    app: &mut App,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
    state: &mut EventLoopState,
) {
    let snapshot = app.playback_snapshot();

    app.playback = match snapshot.as_ref() {
        Some(info) if info.track.is_some() => {
            if info.playing {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            }
        }
        _ => PlaybackState::Stopped,
    };

    let track = snapshot.as_ref().and_then(|info| info.track.clone());
    let track_id = track.as_ref().map(|t| t.id.clone());
    if track_id == state.last_snapshot_track_id {
        return;
    }

    if let Err(e) = library.set_now_playing(track.as_ref()) {
        app.status = Some(format!("could not save playback state: {e}"));
    }
    app.player_favorite = track
        .as_ref()
        .is_some_and(|t| library.is_favorite(&t.id));

    app.clear_lyrics();
    if let Some(t) = track.as_ref() {
        catalog.request(CatalogCmd::Lyrics {
            track_id: t.id.clone(),
            artist: t.artist.clone(),
            title: t.title.clone(),
        });
    }

    state.last_snapshot_track_id = track_id;
}

fn apply_catalog_event(app: &mut App, library: &MusicLibrary, event: CatalogEvent) {
    match event {
        CatalogEvent::Trending(tracks) => {
            app.trending = tracks;
            app.home_loading = false;
            clamp_cursor(&mut app.trending_sel, app.trending.len());
        }
        CatalogEvent::TopArtists(artists) => {
            app.top_artists = artists;
            clamp_cursor(&mut app.top_artists_sel, app.top_artists.len());
        }
        CatalogEvent::TopPlaylists(playlists) => {
            app.top_playlists = playlists;
            clamp_cursor(&mut app.top_playlists_sel, app.top_playlists.len());
        }
        CatalogEvent::Genres(genres) => {
            app.genres = genres;
            clamp_cursor(&mut app.genres_sel, app.genres.len());
        }
        CatalogEvent::GenreTracks { genre_id, tracks } => {
            // A slow response for a genre the user already left is dropped.
            if matches!(app.screen(), Screen::GenreTracks { genre_id: current, .. } if current == &genre_id)
            {
                app.genre_tracks = tracks;
                app.genre_loading = false;
                clamp_cursor(&mut app.genre_tracks_sel, app.genre_tracks.len());
            }
        }
        CatalogEvent::Playlist { playlist, tracks } => {
            if let Screen::Playlist { id } = app.screen().clone() {
                let matches_screen = playlist.as_ref().map(|p| p.id == id).unwrap_or(true);
                if matches_screen {
                    app.playlist_liked = playlist
                        .as_ref()
                        .is_some_and(|p| library.is_liked(&p.id));
                    app.playlist = playlist;
                    app.playlist_tracks = tracks;
                    app.playlist_loading = false;
                    clamp_cursor(&mut app.playlist_tracks_sel, app.playlist_tracks.len());
                }
            }
        }
        CatalogEvent::Artist { artist, tracks } => {
            if let Screen::Artist { id } = app.screen().clone() {
                let matches_screen = artist.as_ref().map(|a| a.id == id).unwrap_or(true);
                if matches_screen {
                    app.artist_followed = artist
                        .as_ref()
                        .is_some_and(|a| library.is_following(&a.id));
                    app.artist = artist;
                    app.artist_tracks = tracks;
                    app.artist_loading = false;
                    clamp_cursor(&mut app.artist_tracks_sel, app.artist_tracks.len());
                }
            }
        }
        CatalogEvent::SearchResults { query, tracks } => {
            if app.search_pending.as_deref() == Some(query.as_str()) {
                app.search_results = tracks;
                clamp_cursor(&mut app.search_results_sel, app.search_results.len());
            }
        }
        CatalogEvent::Lyrics { track_id, text } => {
            // Only accept lyrics for the track still on deck.
            if current_track_id(app).as_deref() == Some(track_id.as_str()) {
                app.set_lyrics(track_id, text);
            }
        }
        CatalogEvent::Failed(msg) => {
            app.status = Some(msg);
        }
    }
}

/// Start playing `queue` at `index` and open the player screen.
fn play_queue(app: &mut App, player: &Player, queue: &[Track], index: usize) {
    if queue.is_empty() {
        return;
    }
    let _ = player.send(PlayerCmd::Play {
        queue: queue.to_vec(),
        index: index.min(queue.len() - 1),
    });
    app.playback = PlaybackState::Playing;
    app.clear_lyrics();
    app.navigate(Screen::Player);
}

fn open_artist(app: &mut App, catalog: &CatalogWorker, id: String) {
    app.artist = None;
    app.artist_tracks.clear();
    app.artist_tracks_sel = 0;
    app.artist_followed = false;
    app.artist_loading = true;
    catalog.request(CatalogCmd::Artist { id: id.clone() });
    app.navigate(Screen::Artist { id });
}

fn open_playlist(app: &mut App, catalog: &CatalogWorker, id: String) {
    app.playlist = None;
    app.playlist_tracks.clear();
    app.playlist_tracks_sel = 0;
    app.playlist_liked = false;
    app.playlist_loading = true;
    catalog.request(CatalogCmd::Playlist { id: id.clone() });
    app.navigate(Screen::Playlist { id });
}

fn submit_search(app: &mut App, catalog: &CatalogWorker, library: &MusicLibrary) {
    let query = app.search_input.trim().to_string();
    if query.chars().count() < 2 {
        app.status = Some("type at least 2 characters to search".to_string());
        return;
    }

    if let Err(e) = library.push_search_term(&query) {
        app.status = Some(format!("could not save search history: {e}"));
    }
    app.search_history = library.search_history();
    app.search_history_sel = 0;

    app.search_results.clear();
    app.search_results_sel = 0;
    app.search_pending = Some(query.clone());
    app.search_focus = SearchFocus::Results;
    catalog.request(CatalogCmd::Search { query });
}

fn handle_control_cmd(
    cmd: ControlCmd,
    settings: &config::Settings,
    app: &mut App,
    player: &Player,
    library: &MusicLibrary,
) -> Result<bool, Box<dyn std::error::Error>> {
    match cmd {
        ControlCmd::Quit => {
            player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        ControlCmd::Play => match app.playback {
            PlaybackState::Paused => {
                let _ = player.send(PlayerCmd::TogglePause);
                app.playback = PlaybackState::Playing;
            }
            PlaybackState::Stopped => resume_saved_track(app, player, library),
            PlaybackState::Playing => {}
        },
        ControlCmd::Pause => {
            if app.playback == PlaybackState::Playing {
                let _ = player.send(PlayerCmd::TogglePause);
                app.playback = PlaybackState::Paused;
            }
        }
        ControlCmd::PlayPause => match app.playback {
            PlaybackState::Stopped => resume_saved_track(app, player, library),
            PlaybackState::Playing => {
                let _ = player.send(PlayerCmd::TogglePause);
                app.playback = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                let _ = player.send(PlayerCmd::TogglePause);
                app.playback = PlaybackState::Playing;
            }
        },
        ControlCmd::Stop => {
            let _ = player.send(PlayerCmd::Stop);
            app.playback = PlaybackState::Stopped;
        }
        ControlCmd::Next => {
            let _ = player.send(PlayerCmd::Skip(SkipDirection::Next));
        }
        ControlCmd::Prev => {
            let _ = player.send(PlayerCmd::Skip(SkipDirection::Prev));
        }
    }

    Ok(false)
}

/// With nothing on deck, play resumes the track saved from the last run.
fn resume_saved_track(app: &mut App, player: &Player, library: &MusicLibrary) {
    if let Some(track) = library.now_playing() {
        play_queue(app, player, &[track], 0);
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &Player,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
    control_tx: &mpsc::Sender<ControlCmd>,
) -> Result<bool, Box<dyn std::error::Error>> {
    // Any keypress dismisses a lingering status message.
    app.status = None;

    let screen = app.screen().clone();

    // Screens that capture typed text get their keys first.
    match screen {
        Screen::Login => return handle_login_keys(key, settings, app, player),
        Screen::SearchResults if app.search_focus == SearchFocus::Input => {
            handle_search_input_keys(key, app, catalog, library);
            return Ok(false);
        }
        _ => {}
    }

    // Global navigation.
    match key.code {
        KeyCode::Char('q') => {
            player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Esc => {
            app.go_back();
            return Ok(false);
        }
        KeyCode::Char('1') => {
            app.navigate_root(Screen::Home);
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.navigate_root(Screen::Search);
            return Ok(false);
        }
        KeyCode::Char('3') => {
            refresh_library_lists(app, library);
            app.navigate_root(Screen::Library);
            return Ok(false);
        }
        KeyCode::Char('n') => {
            app.navigate(Screen::Player);
            return Ok(false);
        }
        _ => {}
    }

    match screen {
        Screen::Login => {}
        Screen::Home => handle_home_keys(key, app, player, catalog),
        Screen::Search => handle_search_keys(key, app, catalog, library),
        Screen::SearchResults => handle_search_results_keys(key, app, player, catalog, library),
        Screen::GenreTracks { .. } => match key.code {
            KeyCode::Char('j') => select_next(&mut app.genre_tracks_sel, app.genre_tracks.len()),
            KeyCode::Char('k') => select_prev(&mut app.genre_tracks_sel, app.genre_tracks.len()),
            KeyCode::Enter => {
                let sel = app.genre_tracks_sel;
                let queue = app.genre_tracks.clone();
                play_queue(app, player, &queue, sel);
            }
            _ => {}
        },
        Screen::Library => handle_library_keys(key, app, player, catalog, library),
        Screen::Artist { .. } => handle_artist_keys(key, app, player, library),
        Screen::Playlist { .. } => handle_playlist_keys(key, app, player, library),
        Screen::Player => handle_player_keys(key, settings, app, player, library, control_tx),
    }

    Ok(false)
}

fn handle_login_keys(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &Player,
) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Esc => {
            player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Tab | KeyCode::Down => app.auth_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.auth_focus_prev(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_register_mode();
        }
        KeyCode::Enter => {
            let name_ok = !app.register_mode || !app.auth_name.trim().is_empty();
            if name_ok && !app.auth_email.trim().is_empty() && !app.auth_password.is_empty() {
                app.complete_login();
            } else {
                app.status = Some("fill in every field first".to_string());
            }
        }
        KeyCode::Backspace => {
            app.auth_field_mut().pop();
        }
        KeyCode::Char(c) if !c.is_control() => {
            app.auth_field_mut().push(c);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_home_keys(key: KeyEvent, app: &mut App, player: &Player, catalog: &CatalogWorker) {
    match key.code {
        KeyCode::Char('j') => {
            let (cursor, len) = app.home_cursor();
            select_next(cursor, len);
        }
        KeyCode::Char('k') => {
            let (cursor, len) = app.home_cursor();
            select_prev(cursor, len);
        }
        KeyCode::Char('l') | KeyCode::Tab => app.home_section_next(),
        KeyCode::Char('h') | KeyCode::BackTab => app.home_section_prev(),
        KeyCode::Enter => match app.home_section {
            HomeSection::Trending => {
                let sel = app.trending_sel;
                let queue = app.trending.clone();
                play_queue(app, player, &queue, sel);
            }
            HomeSection::Artists => {
                if let Some(artist) = app.top_artists.get(app.top_artists_sel) {
                    let id = artist.id.clone();
                    open_artist(app, catalog, id);
                }
            }
            HomeSection::Playlists => {
                if let Some(playlist) = app.top_playlists.get(app.top_playlists_sel) {
                    let id = playlist.id.clone();
                    open_playlist(app, catalog, id);
                }
            }
        },
        _ => {}
    }
}

fn handle_search_keys(key: KeyEvent, app: &mut App, catalog: &CatalogWorker, library: &MusicLibrary) {
    match key.code {
        KeyCode::Char('j') => select_next(&mut app.genres_sel, app.genres.len()),
        KeyCode::Char('k') => select_prev(&mut app.genres_sel, app.genres.len()),
        KeyCode::Enter => {
            if let Some(genre) = app.genres.get(app.genres_sel) {
                let genre_id = genre.id.clone();
                let name = genre.name.clone();
                app.genre_tracks.clear();
                app.genre_tracks_sel = 0;
                app.genre_loading = true;
                catalog.request(CatalogCmd::GenreTracks {
                    genre_id: genre_id.clone(),
                });
                app.navigate(Screen::GenreTracks { genre_id, name });
            }
        }
        KeyCode::Char('/') => {
            app.search_history = library.search_history();
            app.search_history_sel = 0;
            app.search_focus = SearchFocus::Input;
            app.navigate(Screen::SearchResults);
        }
        _ => {}
    }
}

fn handle_search_input_keys(
    key: KeyEvent,
    app: &mut App,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_focus_next();
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_focus_prev();
        }
        KeyCode::Enter => submit_search(app, catalog, library),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) if !c.is_control() => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

fn handle_search_results_keys(
    key: KeyEvent,
    app: &mut App,
    player: &Player,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
) {
    match key.code {
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_focus_next();
            return;
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_focus_prev();
            return;
        }
        _ => {}
    }

    match app.search_focus {
        SearchFocus::Input => {}
        SearchFocus::History => match key.code {
            KeyCode::Char('j') => {
                select_next(&mut app.search_history_sel, app.search_history.len());
            }
            KeyCode::Char('k') => {
                select_prev(&mut app.search_history_sel, app.search_history.len());
            }
            KeyCode::Enter => {
                if let Some(term) = app.search_history.get(app.search_history_sel) {
                    app.search_input = term.clone();
                    submit_search(app, catalog, library);
                }
            }
            KeyCode::Char('d') => {
                if let Some(term) = app.search_history.get(app.search_history_sel).cloned() {
                    if let Err(e) = library.remove_search_term(&term) {
                        app.status = Some(format!("could not update search history: {e}"));
                    }
                    app.search_history = library.search_history();
                    clamp_cursor(&mut app.search_history_sel, app.search_history.len());
                }
            }
            KeyCode::Char('D') => {
                if let Err(e) = library.clear_search_history() {
                    app.status = Some(format!("could not clear search history: {e}"));
                }
                app.search_history.clear();
                app.search_history_sel = 0;
            }
            _ => {}
        },
        SearchFocus::Results => match key.code {
            KeyCode::Char('j') => {
                select_next(&mut app.search_results_sel, app.search_results.len());
            }
            KeyCode::Char('k') => {
                select_prev(&mut app.search_results_sel, app.search_results.len());
            }
            KeyCode::Enter => {
                let sel = app.search_results_sel;
                let queue = app.search_results.clone();
                play_queue(app, player, &queue, sel);
            }
            _ => {}
        },
    }
}

fn handle_library_keys(
    key: KeyEvent,
    app: &mut App,
    player: &Player,
    catalog: &CatalogWorker,
    library: &MusicLibrary,
) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Tab => app.library_tab_next(),
        KeyCode::Char('h') | KeyCode::BackTab => app.library_tab_prev(),
        KeyCode::Char('j') => {
            let (cursor, len) = app.library_cursor();
            select_next(cursor, len);
        }
        KeyCode::Char('k') => {
            let (cursor, len) = app.library_cursor();
            select_prev(cursor, len);
        }
        KeyCode::Enter => match app.library_tab {
            LibraryTab::Playlists => {
                if let Some(playlist) = app.liked_playlists.get(app.liked_playlists_sel) {
                    let id = playlist.id.clone();
                    open_playlist(app, catalog, id);
                }
            }
            LibraryTab::Artists => {
                if let Some(artist) = app.followed_artists.get(app.followed_artists_sel) {
                    let id = artist.id.clone();
                    open_artist(app, catalog, id);
                }
            }
            LibraryTab::Tracks => {
                let sel = app.favorites_sel;
                let queue = app.favorites.clone();
                play_queue(app, player, &queue, sel);
            }
        },
        KeyCode::Char('f') => {
            let result = match app.library_tab {
                LibraryTab::Playlists => app
                    .liked_playlists
                    .get(app.liked_playlists_sel)
                    .map(|p| library.toggle_like(p)),
                LibraryTab::Artists => app
                    .followed_artists
                    .get(app.followed_artists_sel)
                    .map(|a| library.toggle_follow(a)),
                LibraryTab::Tracks => app
                    .favorites
                    .get(app.favorites_sel)
                    .map(|t| library.toggle_favorite(t)),
            };
            if let Some(Err(e)) = result {
                app.status = Some(format!("could not update library: {e}"));
            }
            refresh_library_lists(app, library);
        }
        _ => {}
    }
}

fn handle_artist_keys(key: KeyEvent, app: &mut App, player: &Player, library: &MusicLibrary) {
    match key.code {
        KeyCode::Char('j') => select_next(&mut app.artist_tracks_sel, app.artist_tracks.len()),
        KeyCode::Char('k') => select_prev(&mut app.artist_tracks_sel, app.artist_tracks.len()),
        KeyCode::Enter => {
            let sel = app.artist_tracks_sel;
            let queue = app.artist_tracks.clone();
            play_queue(app, player, &queue, sel);
        }
        KeyCode::Char('f') => {
            if let Some(artist) = app.artist.clone() {
                match library.toggle_follow(&artist) {
                    Ok(following) => app.artist_followed = following,
                    Err(e) => app.status = Some(format!("could not update library: {e}")),
                }
                refresh_library_lists(app, library);
            }
        }
        _ => {}
    }
}

fn handle_playlist_keys(key: KeyEvent, app: &mut App, player: &Player, library: &MusicLibrary) {
    match key.code {
        KeyCode::Char('j') => select_next(&mut app.playlist_tracks_sel, app.playlist_tracks.len()),
        KeyCode::Char('k') => select_prev(&mut app.playlist_tracks_sel, app.playlist_tracks.len()),
        KeyCode::Enter => {
            let sel = app.playlist_tracks_sel;
            let queue = app.playlist_tracks.clone();
            play_queue(app, player, &queue, sel);
        }
        KeyCode::Char('f') => {
            if let Some(playlist) = app.playlist.clone() {
                match library.toggle_like(&playlist) {
                    Ok(liked) => app.playlist_liked = liked,
                    Err(e) => app.status = Some(format!("could not update library: {e}")),
                }
                refresh_library_lists(app, library);
            }
        }
        _ => {}
    }
}

fn handle_player_keys(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &Player,
    library: &MusicLibrary,
    control_tx: &mpsc::Sender<ControlCmd>,
) {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = player.send(PlayerCmd::Skip(SkipDirection::Next));
        }
        KeyCode::Char('h') => {
            let _ = player.send(PlayerCmd::Skip(SkipDirection::Prev));
        }
        KeyCode::Char('L') => relative_seek(app, player, settings.controls.seek_step_percent as f32),
        KeyCode::Char('H') => {
            relative_seek(app, player, -(settings.controls.seek_step_percent as f32));
        }
        KeyCode::Char(c @ '0'..='9') => {
            // `5` jumps to the halfway point, `0` to the start.
            let tenth = c as u32 - '0' as u32;
            let _ = player.send(PlayerCmd::Seek(tenth as f32 / 10.0));
        }
        KeyCode::Char('j') => {
            app.lyrics_scroll = app.lyrics_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.lyrics_scroll = app.lyrics_scroll.saturating_sub(1);
        }
        KeyCode::Char('f') => {
            let track = app
                .playback_snapshot()
                .and_then(|info| info.track);
            if let Some(track) = track {
                match library.toggle_favorite(&track) {
                    Ok(favorite) => app.player_favorite = favorite,
                    Err(e) => app.status = Some(format!("could not update library: {e}")),
                }
                refresh_library_lists(app, library);
            }
        }
        _ => {}
    }
}

/// Nudge playback by `step_percent` of the track, clamped to its bounds.
fn relative_seek(app: &App, player: &Player, step_percent: f32) {
    let Some(info) = app.playback_snapshot() else {
        return;
    };
    if info.track.is_none() || info.duration_millis <= 1 {
        return;
    }
    let current = info.position_millis as f32 / info.duration_millis as f32;
    let fraction = (current + step_percent / 100.0).clamp(0.0, 1.0);
    let _ = player.send(PlayerCmd::Seek(fraction));
}

fn refresh_library_lists(app: &mut App, library: &MusicLibrary) {
    app.favorites = library.favorites();
    app.followed_artists = library.followed_artists();
    app.liked_playlists = library.liked_playlists();
    clamp_cursor(&mut app.favorites_sel, app.favorites.len());
    clamp_cursor(&mut app.followed_artists_sel, app.followed_artists.len());
    clamp_cursor(&mut app.liked_playlists_sel, app.liked_playlists.len());
}
