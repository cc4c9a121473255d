//! The artist detail screen: name, follow state and top tracks.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::app::App;

use super::widgets::draw_track_list;

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let headline = match &app.artist {
        Some(artist) => {
            let follow = if app.artist_followed {
                "following (f unfollows)"
            } else {
                "f follows"
            };
            format!(" {} — {}", artist.name, follow)
        }
        None if app.artist_loading => " loading...".to_string(),
        None => " artist unavailable".to_string(),
    };
    frame.render_widget(Paragraph::new(headline), rows[0]);

    draw_track_list(
        frame,
        rows[1],
        " top tracks ",
        &app.artist_tracks,
        app.artist_tracks_sel,
        app.artist_loading,
        true,
    );
}
