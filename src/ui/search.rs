//! The search screens: a genre grid to browse from, and a results view
//! with the query input, recent searches and matching tracks.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SearchFocus};

use super::widgets::{draw_list, draw_track_list};

pub(super) fn draw_genres(frame: &mut Frame, app: &App, area: Rect) {
    let labels: Vec<String> = if app.genres.is_empty() {
        vec!["loading...".to_string()]
    } else {
        app.genres.iter().map(|g| g.name.clone()).collect()
    };
    draw_list(
        frame,
        area,
        " genres ",
        &labels,
        app.genres_sel,
        !app.genres.is_empty(),
    );
}

pub(super) fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(1),
        ])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" search (min. 2 characters) ");
    let input_block = if app.search_focus == SearchFocus::Input {
        input_block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        input_block
    };
    let shown = if app.search_focus == SearchFocus::Input {
        format!("{}█", app.search_input)
    } else {
        app.search_input.clone()
    };
    frame.render_widget(Paragraph::new(shown).block(input_block), rows[0]);

    let history: Vec<String> = if app.search_history.is_empty() {
        vec!["no recent searches".to_string()]
    } else {
        app.search_history.clone()
    };
    draw_list(
        frame,
        rows[1],
        " recent ",
        &history,
        app.search_history_sel,
        app.search_focus == SearchFocus::History && !app.search_history.is_empty(),
    );

    let title = match &app.search_pending {
        Some(q) => format!(" results for \"{q}\" "),
        None => " results ".to_string(),
    };
    draw_track_list(
        frame,
        rows[2],
        &title,
        &app.search_results,
        app.search_results_sel,
        false,
        app.search_focus == SearchFocus::Results,
    );
}
