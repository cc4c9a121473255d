//! The player screen: the current track, a seek gauge and the lyrics panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, PlaybackState};
use crate::player::NowPlayingInfo;

use super::widgets::format_millis;

pub(super) fn draw(frame: &mut Frame, app: &App, snapshot: Option<&NowPlayingInfo>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let Some(info) = snapshot else {
        frame.render_widget(
            Paragraph::new("nothing playing — pick a track first")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            rows[0],
        );
        return;
    };

    let headline = match &info.track {
        Some(track) => {
            let state = match app.playback {
                PlaybackState::Playing => "playing",
                PlaybackState::Paused => "paused",
                PlaybackState::Stopped => "stopped",
            };
            let heart = if app.player_favorite { "♥" } else { " " };
            let position = match (info.index, info.queue_len) {
                (Some(i), n) if n > 0 => format!("{}/{}", i + 1, n),
                _ => String::new(),
            };
            format!(
                "{heart} {}\n   {} · {state} {position}",
                track.title, track.artist
            )
        }
        None => "nothing playing — pick a track first".to_string(),
    };
    let headline = match &info.last_error {
        Some(err) => format!("{headline}\n   {err}"),
        None => headline,
    };
    frame.render_widget(
        Paragraph::new(headline).block(Block::default().borders(Borders::ALL).padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })),
        rows[0],
    );

    // duration_millis is at least 1, so the ratio is always finite.
    let ratio = (info.position_millis as f64 / info.duration_millis as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .ratio(ratio)
        .label(format!(
            "{} / {}",
            format_millis(info.position_millis),
            format_millis(info.duration_millis)
        ));
    frame.render_widget(gauge, rows[1]);

    let lyrics = app.lyrics.as_deref().unwrap_or("Loading lyrics...");
    let lyrics_par = Paragraph::new(lyrics)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lyrics (j/k scrolls) ")
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.lyrics_scroll, 0));
    frame.render_widget(lyrics_par, rows[2]);
}
