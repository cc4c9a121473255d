//! UI rendering for the terminal user interface.
//!
//! Each screen gets its own render function; `draw` lays out the shared
//! chrome (header, now-playing bar, controls footer) and dispatches the
//! body to the screen on top of the navigation stack.

mod artist;
mod home;
mod library;
mod login;
mod player;
mod playlist;
mod search;
mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState, Screen};
use crate::config::{ControlsSettings, UiSettings};

use widgets::format_millis;

/// Render the controls help text for the active screen.
fn controls_text(screen: &Screen, controls: &ControlsSettings) -> String {
    let common = "[1/2/3] home/search/library | [n] player | [esc] back | [q] quit";
    match screen {
        Screen::Login => {
            "[tab] next field | [enter] submit | [ctrl+r] login/register | [esc] quit".to_string()
        }
        Screen::Home => format!("[j/k] up/down | [h/l] section | [enter] open/play | {common}"),
        Screen::Search => format!("[j/k] up/down | [enter] genre | [/] search | {common}"),
        Screen::SearchResults => format!(
            "[type] query | [enter] search | [ctrl+j/k] pane | [d] forget | [D] clear history | {common}"
        ),
        Screen::GenreTracks { .. } => format!("[j/k] up/down | [enter] play | {common}"),
        Screen::Library => format!("[h/l] tab | [j/k] up/down | [enter] open | [f] remove | {common}"),
        Screen::Artist { .. } => format!("[j/k] up/down | [enter] play | [f] follow | {common}"),
        Screen::Playlist { .. } => format!("[j/k] up/down | [enter] play | [f] like | {common}"),
        Screen::Player => format!(
            "[space/p] play/pause | [h/l] prev/next | [H/L] scrub -/+{p}% | [0-9] jump | [j/k] lyrics | [f] favorite | {common}",
            p = controls.seek_step_percent
        ),
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let snapshot = app.playback_snapshot();
    let show_bar = snapshot
        .as_ref()
        .is_some_and(|s| s.track.is_some() && app.screen() != &Screen::Player);

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if show_bar {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    // Header
    let title = match app.screen() {
        Screen::Login => " vibra ",
        Screen::Home => " home ",
        Screen::Search => " search ",
        Screen::SearchResults => " search ",
        Screen::GenreTracks { .. } => " genre ",
        Screen::Library => " library ",
        Screen::Artist { .. } => " artist ",
        Screen::Playlist { .. } => " playlist ",
        Screen::Player => " now playing ",
    };
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Body
    match app.screen().clone() {
        Screen::Login => login::draw(frame, app, chunks[1]),
        Screen::Home => home::draw(frame, app, ui_settings, chunks[1]),
        Screen::Search => search::draw_genres(frame, app, chunks[1]),
        Screen::SearchResults => search::draw_results(frame, app, chunks[1]),
        Screen::GenreTracks { name, .. } => {
            widgets::draw_track_list(
                frame,
                chunks[1],
                &format!(" {} ", name.to_lowercase()),
                &app.genre_tracks,
                app.genre_tracks_sel,
                app.genre_loading,
                true,
            );
        }
        Screen::Library => library::draw(frame, app, chunks[1]),
        Screen::Artist { .. } => artist::draw(frame, app, chunks[1]),
        Screen::Playlist { .. } => playlist::draw(frame, app, chunks[1]),
        Screen::Player => player::draw(frame, app, snapshot.as_ref(), chunks[1]),
    }

    // Now-playing bar (hidden on the player screen itself)
    if show_bar {
        let bar = snapshot.as_ref().and_then(|info| {
            info.track.as_ref().map(|track| {
                let state = match app.playback {
                    PlaybackState::Playing => "▶",
                    PlaybackState::Paused => "⏸",
                    PlaybackState::Stopped => "⏹",
                };
                format!(
                    "{state} {} — {} [{} / {}]",
                    track.title,
                    track.artist,
                    format_millis(info.position_millis),
                    format_millis(info.duration_millis),
                )
            })
        });
        let bar = Paragraph::new(bar.unwrap_or_default()).block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing (n opens) "),
        );
        frame.render_widget(bar, chunks[2]);
    }

    // Footer: status message when present, controls otherwise.
    let footer_area = *chunks.last().unwrap_or(&chunks[1]);
    let (footer_title, footer_text) = match &app.status {
        Some(msg) => (" status ", msg.clone()),
        None => (" controls ", controls_text(app.screen(), controls_settings)),
    };
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(footer_title)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests;
