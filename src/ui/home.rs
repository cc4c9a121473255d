//! The home screen: trending tracks, top artists and top playlists side
//! by side, with `h`/`l` moving between the columns.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::app::{App, HomeSection};
use crate::config::UiSettings;

use super::widgets::{draw_list, track_label};

pub(super) fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" hey, {} — what are we listening to?", ui_settings.profile_name)),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    let placeholder = |loading: bool| -> Vec<String> {
        if loading {
            vec!["loading...".to_string()]
        } else {
            vec!["nothing here".to_string()]
        }
    };

    let trending: Vec<String> = if app.trending.is_empty() {
        placeholder(app.home_loading)
    } else {
        app.trending.iter().map(track_label).collect()
    };
    draw_list(
        frame,
        columns[0],
        " trending ",
        &trending,
        app.trending_sel,
        app.home_section == HomeSection::Trending,
    );

    let artists: Vec<String> = if app.top_artists.is_empty() {
        placeholder(app.home_loading)
    } else {
        app.top_artists.iter().map(|a| a.name.clone()).collect()
    };
    draw_list(
        frame,
        columns[1],
        " top artists ",
        &artists,
        app.top_artists_sel,
        app.home_section == HomeSection::Artists,
    );

    let playlists: Vec<String> = if app.top_playlists.is_empty() {
        placeholder(app.home_loading)
    } else {
        app.top_playlists.iter().map(|p| p.title.clone()).collect()
    };
    draw_list(
        frame,
        columns[2],
        " top playlists ",
        &playlists,
        app.top_playlists_sel,
        app.home_section == HomeSection::Playlists,
    );
}
