//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::{Step, View};
use components::{render_error_dialog, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Wizard => draw_wizard(frame, content_area, app),
        View::Confirmation => confirmation::draw(frame, content_area),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog is modal and drawn last
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}

/// Draw the card holding the progress header, current step and navigation
fn draw_wizard(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::card_area(area);
    let block = Block::default()
        .title(" Inventory Workflow Setup ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT), // Progress header
            Constraint::Length(1),                     // Spacer
            Constraint::Min(0),                        // Step content
            Constraint::Length(BUTTON_HEIGHT),         // Navigation
        ])
        .horizontal_margin(1)
        .split(inner);

    layout::draw_header(frame, chunks[0], app);

    match app.step() {
        Step::PersonalInfo => forms::draw_personal_info(frame, chunks[2], app),
        Step::ProgramSelection => forms::draw_program_selection(frame, chunks[2], app),
        Step::DocumentUpload => forms::draw_document_upload(frame, chunks[2], app),
    }

    layout::draw_navigation(frame, chunks[3], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeConfig;
    use crate::sink::MockSubmissionSink;
    use crate::state::{Attachment, TextField};
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::with_sink(IntakeConfig::default(), Box::new(MockSubmissionSink::new()))
    }

    /// Render the app and return the screen as one string per row
    fn render(app: &App) -> String {
        render_sized(app, 100, 40)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn to_upload_step(app: &mut App) {
        app.form.set_field(TextField::Name, "Jane Doe");
        app.form.set_field(TextField::Email, "jane@example.com");
        app.go_next();
        app.form.set_field(TextField::Program, "Stock Control System");
        app.go_next();
    }

    #[test]
    fn test_first_step_shows_progress_and_inputs() {
        let screen = render(&test_app());
        assert!(screen.contains("Inventory Workflow Setup"));
        assert!(screen.contains("Step 1 of 3"));
        assert!(screen.contains("33% Complete"));
        assert!(screen.contains("Full Name *"));
        assert!(screen.contains("Next Step"));
    }

    #[test]
    fn test_field_errors_are_rendered() {
        let mut app = test_app();
        app.go_next();
        let screen = render(&app);
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Email is required"));
    }

    #[test]
    fn test_program_step_lists_catalog() {
        let mut app = test_app();
        app.form.set_field(TextField::Name, "Jane Doe");
        app.form.set_field(TextField::Email, "jane@example.com");
        app.go_next();

        let screen = render(&app);
        assert!(screen.contains("Step 2 of 3"));
        assert!(screen.contains("67% Complete"));
        for program in crate::state::PROGRAM_CATALOG {
            assert!(screen.contains(program), "missing {program}");
        }
    }

    #[test]
    fn test_upload_step_shows_selected_file() {
        let mut app = test_app();
        to_upload_step(&mut app);
        app.form.set_attachment(Some(Attachment::new(
            "plan.pdf",
            1536,
            "application/pdf",
            Utc::now(),
        )));

        let screen = render(&app);
        assert!(screen.contains("Submit Form"));
        assert!(screen.contains("plan.pdf"));
        assert!(screen.contains("1.5 KB"));
    }

    #[test]
    fn test_upload_step_shows_file_error_instead_of_card() {
        let mut app = test_app();
        to_upload_step(&mut app);
        app.form.set_attachment(Some(Attachment::new(
            "huge.png",
            6 * 1024 * 1024,
            "image/png",
            Utc::now(),
        )));

        let screen = render(&app);
        assert!(screen.contains("File size must be less than 5MB"));
        assert!(!screen.contains("huge.png"));
    }

    #[test]
    fn test_confirmation_screen() {
        let mut app = test_app();
        app.state.current_view = View::Confirmation;
        let screen = render(&app);
        assert!(screen.contains("Thank You!"));
        assert!(screen.contains("Submit Another Form"));
    }

    #[test]
    fn test_confirmation_button_label_fits_small_terminal() {
        let mut app = test_app();
        app.state.current_view = View::Confirmation;
        let screen = render_sized(&app, 80, 24);
        assert!(screen.contains("Submit Another Form"));
        assert!(screen.contains("in touch soon."));
    }

    #[test]
    fn test_error_dialog_wraps_long_paths() {
        let mut app = test_app();
        app.push_error(
            "File not found: /home/jane/Documents/inventory/2026/quarterly/supporting/scan_final_v2.pdf",
        );
        let screen = render(&app);
        assert!(screen.contains("/home/jane/Documents/inventory/2026/quarterly/supporting"));
        assert!(screen.contains("scan_final_v2.pdf"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = test_app();
        app.push_error("File not found: /tmp/missing.pdf");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("to dismiss"));
    }
}
