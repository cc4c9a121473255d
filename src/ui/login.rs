//! The auth screen: a login form, or a register form with a name field.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AuthField};

fn field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let block = if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    };
    let shown = if focused {
        format!("{value}█")
    } else {
        value.to_string()
    };
    frame.render_widget(Paragraph::new(shown).block(block), area);
}

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let form_height = if app.register_mode { 13 } else { 10 };
    let form = super::widgets::centered_rect_sized(48, form_height, area);

    let mut constraints = vec![Constraint::Length(1)];
    if app.register_mode {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(form);

    let prompt = if app.register_mode {
        "create your account"
    } else {
        "welcome back"
    };
    frame.render_widget(
        Paragraph::new(prompt).alignment(Alignment::Center),
        rows[0],
    );

    let mut next = 1;
    if app.register_mode {
        field(
            frame,
            rows[next],
            " name ",
            &app.auth_name,
            app.auth_focus == AuthField::Name,
        );
        next += 1;
    }
    field(
        frame,
        rows[next],
        " email ",
        &app.auth_email,
        app.auth_focus == AuthField::Email,
    );
    let masked = "*".repeat(app.auth_password.chars().count());
    field(
        frame,
        rows[next + 1],
        " password ",
        &masked,
        app.auth_focus == AuthField::Password,
    );
}
