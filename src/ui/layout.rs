//! Layout components (card, progress header, navigation row, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Focus, NavButton, Step, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Widest the form card is allowed to grow
const CARD_MAX_WIDTH: u16 = 84;

pub const HEADER_HEIGHT: u16 = 4;

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Horizontally centered card inside the content area
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Description, step trail, "Step N of 3", completion percentage and gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.step();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Step trail
            Constraint::Length(1), // Step label
            Constraint::Length(1), // Gauge
        ])
        .split(area);

    let description = Paragraph::new(Span::styled(
        "Complete the form below to get started with your inventory management solution",
        Style::default().fg(Color::Gray),
    ))
    .centered();
    frame.render_widget(description, chunks[0]);

    frame.render_widget(Paragraph::new(step_trail(app)).centered(), chunks[1]);

    let percent = step.percent_complete();
    let step_label = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Step {} of {}", step.number(), Step::COUNT),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(
            format!("{percent}% Complete"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(step_label, chunks[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent)
        .label("");
    frame.render_widget(gauge, chunks[3]);
}

/// "✓ Personal Information  ● Program Selection  ○ Document Upload"
fn step_trail(app: &App) -> Line<'static> {
    let current = app.step();
    let mut spans = Vec::new();

    for step in [Step::PersonalInfo, Step::ProgramSelection, Step::DocumentUpload] {
        let (marker, style) = if step == current {
            ("● ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else if step < current && app.form.validate_step(step).is_empty() {
            ("✓ ", Style::default().fg(Color::Green))
        } else {
            ("○ ", Style::default().fg(Color::DarkGray))
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(marker, style));
        spans.push(Span::styled(step.title(), style));
    }

    Line::from(spans)
}

/// Draw the Previous / Next Step (or Submit Form) buttons
pub fn draw_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.step();
    let focused = app.state.focus(step) == Focus::Actions;
    let selected = app.state.form_selected_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Previous
            Constraint::Min(0),     // Spacer
            Constraint::Length(17), // Primary
        ])
        .split(area);

    let primary_label = if step.is_last() {
        "Submit Form"
    } else {
        "Next Step"
    };

    render_button(
        frame,
        Rect {
            height: BUTTON_HEIGHT.min(area.height),
            ..chunks[0]
        },
        "Previous",
        focused && selected == NavButton::Previous,
        !step.is_first(),
        false,
    );
    render_button(
        frame,
        Rect {
            height: BUTTON_HEIGHT.min(area.height),
            ..chunks[2]
        },
        primary_label,
        focused && selected == NavButton::Primary,
        true,
        true,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view and focus
fn get_view_hints(app: &App) -> &'static str {
    if app.state.current_view == View::Confirmation {
        return "Enter:submit another  q/Esc:quit";
    }

    match app.state.focus(app.step()) {
        Focus::Input(_) => "Tab:next field  ^N:next step  ^P:previous  Esc:quit",
        Focus::ProgramList => "j/k:move  Space:select  ^N:next step  ^P:previous  Esc:quit",
        Focus::AttachmentPath => "Enter:attach  ^S:submit  ^P:previous  Esc:quit",
        Focus::Actions => "←/→:choose  Enter:press  Tab:fields  Esc:quit",
    }
}
