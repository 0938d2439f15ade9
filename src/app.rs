//! Application state and core logic

use crate::config::ContactConfig;
use crate::crm::{CrmClient, CrmClientTrait, CrmError, PAGE_NAME};
use crate::state::{AppState, CelebrationState, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: ContactConfig,
    /// CRM client used for submission
    crm: Arc<dyn CrmClientTrait>,
    /// In-flight submission request
    pending: Option<JoinHandle<Result<(), CrmError>>>,
    /// Confetti animation, present while it plays
    pub celebration: Option<CelebrationState>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: ContactConfig) -> Self {
        let crm = CrmClient::new(config.submit_url());
        tracing::info!("Contact form will submit to {}", crm.submit_url());
        Self::with_client(config, Arc::new(crm))
    }

    /// Create an App with a specific CRM client
    pub fn with_client(config: ContactConfig, crm: Arc<dyn CrmClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            config,
            crm,
            pending: None,
            celebration: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the UI needs fast redraws (animation or pending request)
    pub fn is_animating(&self) -> bool {
        self.celebration.is_some() || self.state.submitting
    }

    /// Advance the confetti animation, dropping it once finished
    pub fn update_celebration(&mut self) {
        if let Some(ref mut celebration) = self.celebration {
            celebration.update();
            if celebration.is_complete() {
                self.celebration = None;
            }
        }
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
    }

    /// Handle keys on the entry view
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            // Submit shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            // Submit button
            KeyCode::Enter | KeyCode::Char(' ') if form.is_submit_focused() => {
                self.submit();
            }
            _ if form.is_submit_focused() => {}
            _ if form.active_descriptor().is_some_and(|f| f.is_choice()) => {
                self.handle_choice_key(key)
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.active_descriptor() {
                Some(field) if field.is_multiline() => form.newline(),
                Some(field) => form.advance_from(field.name),
                None => {}
            },
            _ => {}
        }
    }

    /// Handle keys while a choice group is focused
    fn handle_choice_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                form.highlight_prev_option()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                form.highlight_next_option()
            }
            KeyCode::Enter | KeyCode::Char(' ') => form.confirm_option(),
            // Quick pick by option number
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                form.select_option(index);
            }
            _ => {}
        }
    }

    /// Handle keys on the confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {
                if let Some(ref mut celebration) = self.celebration {
                    celebration.skip();
                }
            }
        }
    }

    /// Validate and send the form. Returns true if a request was started.
    pub fn submit(&mut self) -> bool {
        if self.state.is_submitted() || self.pending.is_some() {
            tracing::debug!("Ignoring submit: already submitted or in flight");
            return false;
        }

        if !self.state.form.validate_all() {
            let count = self.state.form.errors().len();
            tracing::debug!(errors = count, "Contact form failed validation");
            self.state.status_message = Some(format!(
                "{count} field{} need{} attention",
                if count == 1 { "" } else { "s" },
                if count == 1 { "s" } else { "" },
            ));
            return false;
        }

        let submission = self
            .state
            .form
            .build_submission(self.config.page_uri(), PAGE_NAME);
        let crm = Arc::clone(&self.crm);
        self.pending = Some(tokio::spawn(
            async move { crm.submit(&submission).await },
        ));
        self.state.submitting = true;
        self.state.status_message = Some("Sending message...".to_string());
        true
    }

    /// Apply the submission result if the request has completed
    pub async fn poll_submission(&mut self) {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            self.finish_submission().await;
        }
    }

    /// Wait for the in-flight submission and apply its result
    pub async fn finish_submission(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        self.state.submitting = false;
        self.state.status_message = None;

        match handle.await {
            Ok(Ok(())) => {
                if self.state.mark_submitted() && self.config.confetti_enabled() {
                    self.celebration = Some(CelebrationState::new());
                }
            }
            Ok(Err(err)) => {
                tracing::warn!("Contact form submission failed: {err}");
            }
            Err(err) => {
                tracing::error!("Submission task did not complete: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::{MockCrmClientTrait, Submission};
    use crate::state::CONTACT_FIELDS;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockCrmClientTrait) -> App {
        App::with_client(ContactConfig::default(), Arc::new(mock))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Fill every required field through the keyboard
    fn fill_minimal(app: &mut App) {
        type_text(app, "Ada");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Lovelace");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Analytical Engines");
        app.handle_key(key(KeyCode::Tab));
        // role: pick Engineering, which reveals monthlyActiveUsers defaulted to the first tier
        app.handle_key(key(KeyCode::Char('2')));
        // monthlyActiveUsers -> 10k-50k
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        // monthlyEvents -> keep default, product -> Cloud, demo -> Yes
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
    }

    fn field_value<'a>(submission: &'a Submission, name: &str) -> Option<&'a serde_json::Value> {
        submission
            .fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    mod keyboard {
        use super::*;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = app_with(MockCrmClientTrait::new());
            type_text(&mut app, "Grace");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.value("firstName"), Some("Grac"));
        }

        #[test]
        fn test_enter_in_text_field_advances() {
            let mut app = app_with(MockCrmClientTrait::new());
            type_text(&mut app, "Grace");
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.form.active_descriptor().unwrap().name, "lastName");
        }

        #[test]
        fn test_enter_into_choice_group_does_not_pick_option() {
            let mut app = app_with(MockCrmClientTrait::new());
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            type_text(&mut app, "X");
            app.handle_key(key(KeyCode::Enter));

            let form = &app.state.form;
            assert_eq!(form.active_descriptor().unwrap().name, "role");
            assert!(form.is_open("role"));
            assert_eq!(form.value("role"), None);
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.value("firstName"), None);
        }

        #[test]
        fn test_shifted_chars_are_typed() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
            assert_eq!(app.state.form.value("firstName"), Some("G"));
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_keyboard_fill_sets_expected_values() {
            let mut app = app_with(MockCrmClientTrait::new());
            fill_minimal(&mut app);
            let form = &app.state.form;
            assert_eq!(form.value("role"), Some("Engineering"));
            assert_eq!(form.value("monthlyActiveUsers"), Some("50000"));
            assert_eq!(form.value("monthlyEvents"), Some("1000000"));
            assert_eq!(form.value("product"), Some("PostHog Cloud"));
            assert_eq!(form.value("personalizedDemo"), Some("Yes"));
            assert_eq!(form.active_descriptor().unwrap().name, "details");
        }

        #[test]
        fn test_choice_ignores_letters() {
            let mut app = app_with(MockCrmClientTrait::new());
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(app.state.form.value("role"), None);
            assert!(app.state.form.is_open("role"));
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_empty_submit_shows_errors_without_request() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);

            app.handle_key(ctrl('s'));

            let errors = app.state.form.errors();
            for field in CONTACT_FIELDS {
                assert_eq!(
                    errors.contains_key(field.name),
                    crate::state::is_required(field.name),
                    "{}",
                    field.name
                );
            }
            assert!(!app.state.submitting);
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("8 fields need attention")
            );
        }

        #[tokio::test]
        async fn test_valid_submit_posts_once_and_confirms() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit()
                .withf(|submission| {
                    submission.page_name == "Contact sales"
                        && submission.fields.len() == CONTACT_FIELDS.len()
                        && field_value(submission, "icp___role_list") == Some(&json!("engineering"))
                        && field_value(submission, "maus") == Some(&json!(50000))
                        && field_value(submission, "monthly_events") == Some(&json!(1000000))
                        && field_value(submission, "email") == Some(&json!("ada@example.com"))
                        && field_value(submission, "message").is_none()
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_minimal(&mut app);

            app.handle_key(ctrl('s'));
            assert!(app.state.submitting);
            app.finish_submission().await;

            assert_eq!(app.state.current_view, View::Confirmation);
            assert!(!app.state.submitting);
            assert!(app.celebration.is_some());

            // A second submit after confirmation does nothing
            assert!(!app.submit());
        }

        #[tokio::test]
        async fn test_rejected_submit_stays_on_form() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(CrmError::Rejected { status: 500 }));
            let mut app = app_with(mock);
            fill_minimal(&mut app);

            assert!(app.submit());
            app.finish_submission().await;

            assert_eq!(app.state.current_view, View::Form);
            assert!(!app.state.submitting);
            assert!(app.state.status_message.is_none());
            assert!(app.celebration.is_none());
        }

        #[tokio::test]
        async fn test_resubmit_after_failure() {
            let mut mock = MockCrmClientTrait::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(CrmError::Rejected { status: 503 }));
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_minimal(&mut app);

            assert!(app.submit());
            app.finish_submission().await;
            assert_eq!(app.state.current_view, View::Form);

            assert!(app.submit());
            app.finish_submission().await;
            assert_eq!(app.state.current_view, View::Confirmation);
        }

        #[tokio::test]
        async fn test_submit_ignored_while_in_flight() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_minimal(&mut app);

            assert!(app.submit());
            assert!(!app.submit());
            app.finish_submission().await;
            assert!(app.state.is_submitted());
        }

        #[tokio::test]
        async fn test_submit_button_via_enter() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(mock);
            fill_minimal(&mut app);

            // details -> submit button
            app.handle_key(key(KeyCode::Tab));
            assert!(app.state.form.is_submit_focused());
            app.handle_key(key(KeyCode::Enter));
            app.finish_submission().await;
            assert!(app.state.is_submitted());
        }

        #[tokio::test]
        async fn test_confetti_can_be_disabled() {
            let mut mock = MockCrmClientTrait::new();
            mock.expect_submit().returning(|_| Ok(()));
            let config = ContactConfig {
                confetti: Some(false),
                ..Default::default()
            };
            let mut app = App::with_client(config, Arc::new(mock));
            fill_minimal(&mut app);

            app.submit();
            app.finish_submission().await;
            assert!(app.state.is_submitted());
            assert!(app.celebration.is_none());
        }

        #[tokio::test]
        async fn test_poll_without_pending_is_noop() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.poll_submission().await;
            assert_eq!(app.state.current_view, View::Form);
        }
    }

    mod confirmation {
        use super::*;

        #[test]
        fn test_enter_quits_confirmation() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.state.mark_submitted();
            app.handle_key(key(KeyCode::Enter));
            assert!(app.should_quit());
        }

        #[test]
        fn test_other_key_skips_confetti() {
            let mut app = app_with(MockCrmClientTrait::new());
            app.state.mark_submitted();
            app.celebration = Some(CelebrationState::new());
            app.handle_key(key(KeyCode::Char(' ')));
            assert!(!app.should_quit());
            app.update_celebration();
            assert!(app.celebration.is_none());
        }
    }
}
