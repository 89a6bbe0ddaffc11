//! Main application logic

use crate::config::IntakeConfig;
use crate::sink::{self, SubmissionSink};
use crate::state::{
    AppState, Attachment, Field, Focus, FormController, NavButton, Step, TextField, View,
    PROGRAM_CATALOG,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// UI state (focus, input buffers, error queue)
    pub state: AppState,
    /// The intake wizard itself
    pub form: FormController,
    pub config: IntakeConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App using the sink selected by `config`
    pub fn new(config: IntakeConfig) -> Self {
        let sink = sink::from_config(&config);
        Self::with_sink(config, sink)
    }

    pub fn with_sink(config: IntakeConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            form: FormController::new(sink),
            config,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn step(&self) -> Step {
        self.form.state().step()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.quit();
            return;
        }

        match self.state.current_view {
            View::Confirmation => self.handle_confirmation_key(key),
            View::Wizard => self.handle_wizard_key(key),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.submit_another(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        // Keyboard shortcuts (work from anywhere)
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.go_next(),
                KeyCode::Char('p') => self.go_previous(),
                KeyCode::Char('s') if self.step().is_last() => self.submit(),
                _ => {}
            }
            return;
        }

        let step = self.step();
        match key.code {
            KeyCode::Tab => return self.state.next_form_field(step),
            KeyCode::BackTab => return self.state.prev_form_field(step),
            _ => {}
        }

        match self.state.focus(step) {
            Focus::Input(field) => self.handle_input_key(field, key),
            Focus::ProgramList => self.handle_program_key(key),
            Focus::AttachmentPath => self.handle_attachment_key(key),
            Focus::Actions => self.handle_actions_key(key),
        }
    }

    fn handle_input_key(&mut self, field: TextField, key: KeyEvent) {
        let step = self.step();
        let mut value = self.form.state().fields().text(field).to_string();
        match key.code {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Enter => return self.state.next_form_field(step),
            _ => return,
        }
        self.form.set_field(field, value);
    }

    fn handle_program_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.program_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.program_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                let program = PROGRAM_CATALOG[self.state.program_cursor];
                self.form.set_field(TextField::Program, program);
            }
            _ => {}
        }
    }

    fn handle_attachment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.state.attachment_path.push(c),
            KeyCode::Backspace => {
                self.state.attachment_path.pop();
            }
            KeyCode::Enter => self.load_attachment(),
            _ => {}
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.state.toggle_button()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form_selected_button {
                NavButton::Previous => self.go_previous(),
                NavButton::Primary => self.go_next(),
            },
            _ => {}
        }
    }

    /// Read the typed path and attach it; an empty path clears the selection
    pub fn load_attachment(&mut self) {
        let input = self.state.attachment_path.trim();
        if input.is_empty() {
            self.form.set_attachment(None);
            self.state.status_message = None;
            return;
        }

        let path = self.config.resolve_attachment_path(input);
        match Attachment::from_path(&path) {
            Ok(attachment) => {
                let name = attachment.display_name.clone();
                self.form.set_attachment(Some(attachment));
                self.state.status_message = if self.form.state().errors().contains(Field::File) {
                    None
                } else {
                    Some(format!("Selected {name}"))
                };
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// "Next Step" on steps 1-2, "Submit Form" on step 3
    pub fn go_next(&mut self) {
        if self.step().is_last() {
            self.submit();
            return;
        }

        if self.form.advance() {
            self.state.enter_step();
            if self.step() == Step::ProgramSelection {
                self.sync_program_cursor();
            }
        }
    }

    /// "Previous" is disabled on the first step
    pub fn go_previous(&mut self) {
        if self.step().is_first() {
            return;
        }
        self.form.retreat();
        self.state.enter_step();
        if self.step() == Step::ProgramSelection {
            self.sync_program_cursor();
        }
    }

    pub fn submit(&mut self) {
        match self.form.submit() {
            Ok(true) => {
                self.state.current_view = View::Confirmation;
                self.state.status_message = None;
            }
            Ok(false) => {}
            Err(e) => self.push_error(format!("Submission failed: {e}")),
        }
    }

    /// Start a fresh form after a successful submission
    pub fn submit_another(&mut self) {
        self.form.reset();
        self.state.clear_form();
    }

    fn sync_program_cursor(&mut self) {
        let program = &self.form.state().fields().program;
        if let Some(index) = PROGRAM_CATALOG.iter().position(|p| *p == program.as_str()) {
            self.state.program_cursor = index;
        }
    }
}
