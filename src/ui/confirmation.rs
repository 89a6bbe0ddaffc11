//! Thank-you screen shown after a successful submission

use super::components::{centered_rect, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 14;

pub fn draw(frame: &mut Frame, area: Rect) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Check mark
            Constraint::Length(2),             // Heading
            Constraint::Length(3),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Thank You!",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        chunks[1],
    );

    let message = Paragraph::new(Line::from(Span::styled(
        "Your information has been submitted successfully. We'll be in touch soon.",
        Style::default().fg(Color::Gray),
    )))
    .centered()
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[2]);

    render_button(frame, chunks[3], "Submit Another Form", true, true, true);
}
