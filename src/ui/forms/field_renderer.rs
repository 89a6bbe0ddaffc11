//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one input: bordered box plus the error line under it
pub const FIELD_HEIGHT: u16 = 4;

/// A single-line text input with its label, placeholder and error
pub struct InputField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub error: Option<String>,
}

/// Draw an input box with its error message directly below it
pub fn draw_input(frame: &mut Frame, area: Rect, field: InputField) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if field.is_active { "▌" } else { "" };

    let text = if field.value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(field.value)
    };

    let content = if field.value.is_empty() && field.is_active {
        // Cursor goes before the placeholder so typing reads naturally
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            text,
        ])
    } else {
        Line::from(vec![
            text,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = field.error.as_deref() {
        draw_error_line(frame, chunks[1], message);
    }
}

/// Draw a one-line field error
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(" ⚠ ", Style::default().fg(Color::Red)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw an alert box, used for step-level errors such as the program or file error
pub fn draw_alert(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let text = Line::from(vec![
        Span::styled(
            "⚠ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Draw the bold section heading for a step
pub fn draw_section_title(frame: &mut Frame, area: Rect, title: &str) {
    let heading = Paragraph::new(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, area);
}

/// Draw muted help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}
