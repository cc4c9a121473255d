use super::*;

#[test]
fn app_starts_on_login() {
    let app = App::new();
    assert_eq!(app.screen(), &Screen::Login);
    assert_eq!(app.playback, PlaybackState::Stopped);
}

#[test]
fn navigate_pushes_and_back_pops() {
    let mut app = App::new();
    app.complete_login();
    app.navigate(Screen::Artist { id: "27".into() });
    app.navigate(Screen::Player);
    assert_eq!(app.screen(), &Screen::Player);

    assert!(app.go_back());
    assert_eq!(app.screen(), &Screen::Artist { id: "27".into() });
    assert!(app.go_back());
    assert_eq!(app.screen(), &Screen::Home);
    // Root never pops.
    assert!(!app.go_back());
    assert_eq!(app.screen(), &Screen::Home);
}

#[test]
fn navigate_dedupes_repeat_pushes() {
    let mut app = App::new();
    app.complete_login();
    app.navigate(Screen::Player);
    app.navigate(Screen::Player);
    assert!(app.go_back());
    assert_eq!(app.screen(), &Screen::Home);
}

#[test]
fn navigate_root_resets_the_stack() {
    let mut app = App::new();
    app.complete_login();
    app.navigate(Screen::Playlist { id: "908622995".into() });
    app.navigate_root(Screen::Library);
    assert_eq!(app.screen(), &Screen::Library);
    assert!(!app.go_back());
}

#[test]
fn complete_login_clears_the_password() {
    let mut app = App::new();
    app.auth_email = "vibes@example.com".into();
    app.auth_password = "hunter2".into();
    app.complete_login();
    assert_eq!(app.screen(), &Screen::Home);
    assert!(app.auth_password.is_empty());
    assert_eq!(app.auth_email, "vibes@example.com");
}

#[test]
fn auth_focus_skips_name_outside_register_mode() {
    let mut app = App::new();
    assert_eq!(app.auth_focus, AuthField::Email);
    app.auth_focus_next();
    assert_eq!(app.auth_focus, AuthField::Password);
    app.auth_focus_next();
    assert_eq!(app.auth_focus, AuthField::Email);

    app.toggle_register_mode();
    assert_eq!(app.auth_focus, AuthField::Name);
    app.auth_focus_next();
    app.auth_focus_next();
    app.auth_focus_next();
    assert_eq!(app.auth_focus, AuthField::Name);
}

#[test]
fn auth_focus_prev_walks_backwards() {
    let mut app = App::new();
    assert_eq!(app.auth_focus, AuthField::Email);
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Password);
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Email);

    app.toggle_register_mode();
    assert_eq!(app.auth_focus, AuthField::Name);
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Password);
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Email);
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Name);
}

#[test]
fn auth_focus_prev_undoes_next() {
    let mut app = App::new();
    app.toggle_register_mode();
    app.auth_focus_next();
    app.auth_focus_prev();
    assert_eq!(app.auth_focus, AuthField::Name);
}

#[test]
fn home_section_cycles_both_ways() {
    let mut app = App::new();
    app.home_section_next();
    assert_eq!(app.home_section, HomeSection::Artists);
    app.home_section_next();
    app.home_section_next();
    assert_eq!(app.home_section, HomeSection::Trending);
    app.home_section_prev();
    assert_eq!(app.home_section, HomeSection::Playlists);
}

#[test]
fn library_tab_cycles_both_ways() {
    let mut app = App::new();
    app.library_tab_next();
    assert_eq!(app.library_tab, LibraryTab::Artists);
    app.library_tab_prev();
    app.library_tab_prev();
    assert_eq!(app.library_tab, LibraryTab::Tracks);
}

#[test]
fn selection_wraps_and_tolerates_empty_lists() {
    let mut cursor = 2;
    select_next(&mut cursor, 3);
    assert_eq!(cursor, 0);
    select_prev(&mut cursor, 3);
    assert_eq!(cursor, 2);

    select_next(&mut cursor, 0);
    assert_eq!(cursor, 0);
    cursor = 9;
    select_prev(&mut cursor, 0);
    assert_eq!(cursor, 0);
}

#[test]
fn clamp_cursor_folds_stale_positions() {
    let mut cursor = 7;
    clamp_cursor(&mut cursor, 3);
    assert_eq!(cursor, 2);
    clamp_cursor(&mut cursor, 0);
    assert_eq!(cursor, 0);
}

#[test]
fn lyrics_follow_the_track() {
    let mut app = App::new();
    app.lyrics_scroll = 12;
    app.set_lyrics("3135556".into(), "Work it harder".into());
    assert_eq!(app.lyrics_scroll, 0);
    assert_eq!(app.lyrics_track_id.as_deref(), Some("3135556"));

    app.clear_lyrics();
    assert!(app.lyrics.is_none());
    assert!(app.lyrics_track_id.is_none());
}
