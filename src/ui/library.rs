//! The library screen: liked playlists, followed artists and favorite
//! tracks behind a tab row.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Tabs,
};

use crate::app::{App, LibraryTab};

use super::widgets::{draw_list, track_label};

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let selected = match app.library_tab {
        LibraryTab::Playlists => 0,
        LibraryTab::Artists => 1,
        LibraryTab::Tracks => 2,
    };
    let tabs = Tabs::new(vec!["playlists", "artists", "tracks"])
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(tabs, rows[0]);

    let (title, labels, cursor) = match app.library_tab {
        LibraryTab::Playlists => (
            " liked playlists ",
            app.liked_playlists
                .iter()
                .map(|p| p.title.clone())
                .collect::<Vec<_>>(),
            app.liked_playlists_sel,
        ),
        LibraryTab::Artists => (
            " followed artists ",
            app.followed_artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<_>>(),
            app.followed_artists_sel,
        ),
        LibraryTab::Tracks => (
            " favorite tracks ",
            app.favorites.iter().map(track_label).collect::<Vec<_>>(),
            app.favorites_sel,
        ),
    };

    if labels.is_empty() {
        let empty = vec!["nothing saved yet".to_string()];
        draw_list(frame, rows[1], title, &empty, 0, false);
    } else {
        draw_list(frame, rows[1], title, &labels, cursor, true);
    }
}
