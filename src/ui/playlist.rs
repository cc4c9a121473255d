//! The playlist detail screen: title, like state and the track list.

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

    let headline = match &app.playlist {
        Some(playlist) => {
            let like = if app.playlist_liked {
                "liked (f unlikes)"
            } else {
                "f likes"
            };
            format!(
                " {} — {} tracks — {}",
                playlist.title,
                app.playlist_tracks.len(),
                like
            )
        }
        None if app.playlist_loading => " loading...".to_string(),
        None => " playlist unavailable".to_string(),
    };
    frame.render_widget(Paragraph::new(headline), rows[0]);

    draw_track_list(
        frame,
        rows[1],
        " tracks ",
        &app.playlist_tracks,
        app.playlist_tracks_sel,
        app.playlist_loading,
        true,
    );
}
