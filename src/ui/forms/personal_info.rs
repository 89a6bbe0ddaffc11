//! Step 1: personal information

use super::field_renderer::{draw_input, draw_section_title, InputField, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, Focus, TextField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Section title
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Min(0),
        ])
        .split(area);

    draw_section_title(frame, chunks[0], app.step().title());

    let form = app.form.state();
    let focus = app.state.focus(app.step());

    draw_input(
        frame,
        chunks[1],
        InputField {
            label: "Full Name *",
            value: &form.fields().name,
            placeholder: "Enter your full name",
            is_active: focus == Focus::Input(TextField::Name),
            error: form.errors().message(Field::Name),
        },
    );

    draw_input(
        frame,
        chunks[2],
        InputField {
            label: "Email Address *",
            value: &form.fields().email,
            placeholder: "Enter your email address",
            is_active: focus == Focus::Input(TextField::Email),
            error: form.errors().message(Field::Email),
        },
    );
}
