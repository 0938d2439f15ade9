//! Application state definitions

use super::forms::ContactForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Contact form entry
    #[default]
    Form,
    /// Shown once the CRM accepted the submission
    Confirmation,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,
    /// A submission request is in flight
    pub submitting: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Move to the confirmation view. Returns false if already there.
    pub fn mark_submitted(&mut self) -> bool {
        if self.current_view == View::Confirmation {
            return false;
        }
        self.current_view = View::Confirmation;
        self.submitting = false;
        self.status_message = None;
        true
    }

    pub fn is_submitted(&self) -> bool {
        self.current_view == View::Confirmation
    }
}
