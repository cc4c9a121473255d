//! Shared rendering helpers used by the per-screen draw functions.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::catalog::Track;

/// Format a milliseconds count as `MM:SS`.
pub(super) fn format_millis(millis: u64) -> String {
    let secs = millis / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
pub(super) fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Compute the visible window of a list so the selection stays centered
/// when the list is taller than the viewport. Returns `(start, end,
/// selected_pos_in_visible)`.
pub(super) fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    let sel = selected.min(total.saturating_sub(1));
    if total <= height || height == 0 {
        return (0, total, sel);
    }
    let half = height / 2;
    let mut start = sel.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, sel - start)
}

/// Render a generic selectable list of labels in a bordered block.
pub(super) fn draw_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[String],
    selected: usize,
    focused: bool,
) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let (start, end, sel_in_view) = visible_window(labels.len(), inner_height, selected);

    let items: Vec<ListItem> = labels[start..end]
        .iter()
        .map(|l| ListItem::new(l.as_str()))
        .collect();

    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let block = if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !labels.is_empty() && focused {
        state.select(Some(sel_in_view));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render a list of tracks as `title — artist` rows.
pub(super) fn draw_track_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tracks: &[Track],
    selected: usize,
    loading: bool,
    focused: bool,
) {
    let labels: Vec<String> = if loading {
        vec!["loading...".to_string()]
    } else if tracks.is_empty() {
        vec!["nothing here".to_string()]
    } else {
        tracks.iter().map(track_label).collect()
    };
    let focused = track_list_focus(loading, tracks.len(), focused);
    draw_list(frame, area, title, &labels, selected, focused);
}

/// A track list only renders as focused when it holds real rows; loading
/// and empty placeholders never take the highlight.
pub(super) fn track_list_focus(loading: bool, len: usize, focused: bool) -> bool {
    focused && !loading && len > 0
}

pub(super) fn track_label(track: &Track) -> String {
    format!("{} — {}", track.title, track.artist)
}
