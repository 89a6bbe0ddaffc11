//! Application state definitions

use super::forms::{Step, TextField, PROGRAM_CATALOG};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    Confirmation,
}

/// What currently has keyboard focus inside a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(TextField),
    ProgramList,
    AttachmentPath,
    Actions,
}

/// Buttons on the navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavButton {
    Previous,
    #[default]
    Primary,
}

/// UI-only state that sits next to the form snapshot
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Index into `focus_order` for the current step
    pub active_form_field: usize,
    pub form_selected_button: NavButton,
    /// Highlighted row in the program list
    pub program_cursor: usize,
    /// Path typed on the upload step
    pub attachment_path: String,
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Focus targets for a step, in Tab order
    pub fn focus_order(step: Step) -> &'static [Focus] {
        match step {
            Step::PersonalInfo => &[
                Focus::Input(TextField::Name),
                Focus::Input(TextField::Email),
                Focus::Actions,
            ],
            Step::ProgramSelection => &[Focus::ProgramList, Focus::Actions],
            Step::DocumentUpload => &[Focus::AttachmentPath, Focus::Actions],
        }
    }

    pub fn focus(&self, step: Step) -> Focus {
        let order = Self::focus_order(step);
        order[self.active_form_field.min(order.len() - 1)]
    }

    /// Move to next form field (wraps around)
    pub fn next_form_field(&mut self, step: Step) {
        let count = Self::focus_order(step).len();
        self.active_form_field = (self.active_form_field + 1) % count;
    }

    /// Move to previous form field (wraps around)
    pub fn prev_form_field(&mut self, step: Step) {
        let count = Self::focus_order(step).len();
        if self.active_form_field == 0 {
            self.active_form_field = count - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn toggle_button(&mut self) {
        self.form_selected_button = match self.form_selected_button {
            NavButton::Previous => NavButton::Primary,
            NavButton::Primary => NavButton::Previous,
        };
    }

    pub fn program_cursor_up(&mut self) {
        if self.program_cursor == 0 {
            self.program_cursor = PROGRAM_CATALOG.len() - 1;
        } else {
            self.program_cursor -= 1;
        }
    }

    pub fn program_cursor_down(&mut self) {
        self.program_cursor = (self.program_cursor + 1) % PROGRAM_CATALOG.len();
    }

    /// Reset focus when a different step is shown
    pub fn enter_step(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = NavButton::Primary;
    }

    /// Clear everything tied to the previous form session
    pub fn clear_form(&mut self) {
        self.enter_step();
        self.program_cursor = 0;
        self.attachment_path.clear();
        self.status_message = None;
        self.current_view = View::Wizard;
    }

    /// Queue an error message for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
