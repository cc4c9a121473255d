use super::widgets::{format_millis, track_list_focus, visible_window};

#[test]
fn format_millis_renders_mm_ss() {
    assert_eq!(format_millis(0), "00:00");
    assert_eq!(format_millis(59_999), "00:59");
    assert_eq!(format_millis(61_000), "01:01");
    assert_eq!(format_millis(754_000), "12:34");
}

#[test]
fn visible_window_short_lists_show_everything() {
    assert_eq!(visible_window(3, 10, 1), (0, 3, 1));
    assert_eq!(visible_window(0, 10, 0), (0, 0, 0));
}

#[test]
fn visible_window_centers_the_selection() {
    // 20 items, 5 rows: selection 10 sits in the middle of the window.
    assert_eq!(visible_window(20, 5, 10), (8, 13, 2));
    // Near the top the window pins to the start.
    assert_eq!(visible_window(20, 5, 1), (0, 5, 1));
    // Near the bottom the window pins to the end.
    assert_eq!(visible_window(20, 5, 19), (15, 20, 4));
}

#[test]
fn visible_window_clamps_stale_selection() {
    let (start, end, sel) = visible_window(4, 10, 9);
    assert_eq!((start, end), (0, 4));
    assert_eq!(sel, 3);
}

#[test]
fn track_list_focus_follows_the_caller() {
    // Only the pane the caller marks focused highlights its rows.
    assert!(track_list_focus(false, 5, true));
    assert!(!track_list_focus(false, 5, false));
}

#[test]
fn track_list_focus_needs_real_rows() {
    assert!(!track_list_focus(true, 5, true));
    assert!(!track_list_focus(false, 0, true));
}
