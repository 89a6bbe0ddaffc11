//! Step 2: program selection

use super::field_renderer::{draw_alert, draw_help_text, draw_section_title};
use crate::app::App;
use crate::state::{Field, Focus, PROGRAM_CATALOG};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                // Section title
            Constraint::Length(2),                                // Help text
            Constraint::Length(PROGRAM_CATALOG.len() as u16 + 2), // Program list
            Constraint::Length(3),                                // Error alert
            Constraint::Min(0),
        ])
        .split(area);

    draw_section_title(frame, chunks[0], app.step().title());
    draw_help_text(
        frame,
        chunks[1],
        "Choose the inventory program that best fits your needs:",
    );

    let selected_program = app.form.state().fields().program.as_str();
    let is_focused = app.state.focus(app.step()) == Focus::ProgramList;

    let items: Vec<ListItem> = PROGRAM_CATALOG
        .iter()
        .map(|program| {
            let is_chosen = *program == selected_program;
            let marker = if is_chosen { "(•) " } else { "( ) " };
            let style = if is_chosen {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(*program, style),
            ]))
        })
        .collect();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let highlight = if is_focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Programs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(highlight);

    render_scrollable_list(frame, chunks[2], list, app.state.program_cursor);

    if let Some(message) = app.form.state().errors().message(Field::Program) {
        draw_alert(frame, chunks[3], &message);
    }
}
