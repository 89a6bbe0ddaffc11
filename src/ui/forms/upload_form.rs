//! Step 3: document upload

use super::field_renderer::{
    draw_alert, draw_help_text, draw_input, draw_section_title, InputField, FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{Attachment, AttachmentKind, Field, Focus, ACCEPTED_EXTENSIONS};
use crate::ui::widgets::format_file_size;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Section title
            Constraint::Length(2),            // Help text
            Constraint::Length(FIELD_HEIGHT), // Path input
            Constraint::Length(4),            // Selected file / error
            Constraint::Min(0),
        ])
        .split(area);

    draw_section_title(frame, chunks[0], app.step().title());
    draw_help_text(
        frame,
        chunks[1],
        "Upload a relevant document (PDF, PNG, or JPG - max 5MB)",
    );

    let accepted = ACCEPTED_EXTENSIONS.join(", ");
    let placeholder = format!("Path to a {accepted} file, then Enter");
    draw_input(
        frame,
        chunks[2],
        InputField {
            label: "File",
            value: &app.state.attachment_path,
            placeholder: &placeholder,
            is_active: app.state.focus(app.step()) == Focus::AttachmentPath,
            error: None,
        },
    );

    let form = app.form.state();
    match (&form.fields().file, form.errors().message(Field::File)) {
        (_, Some(message)) => draw_alert(frame, chunks[3], &message),
        (Some(attachment), None) => draw_attachment_card(frame, chunks[3], attachment),
        (None, None) => {}
    }
}

/// Green card showing the accepted file
fn draw_attachment_card(frame: &mut Frame, area: Rect, attachment: &Attachment) {
    let (icon, icon_color) = match attachment.kind() {
        AttachmentKind::Pdf => ("▤ ", Color::Red),
        AttachmentKind::Image => ("▣ ", Color::Blue),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(icon, Style::default().fg(icon_color)),
            Span::styled(
                attachment.display_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ✓", Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            format!("  {}", format_file_size(attachment.byte_size)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
