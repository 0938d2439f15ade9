//! Contact form state: values, errors, focus and sequential reveal

use super::field::{descriptor, index_of, FieldDescriptor, CONTACT_FIELDS};
use super::validation::validate_value;
use crate::crm::{Submission, SubmissionField, CONTACT_OBJECT_TYPE};
use std::collections::{BTreeMap, HashSet};

/// Current value of every field; `None` means never set
pub type FormValues = BTreeMap<&'static str, Option<String>>;

/// Validation message per field
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// State of the contact form on the entry view
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: FormValues,
    errors: ValidationErrors,
    /// Choice groups that have been revealed
    open_options: HashSet<&'static str>,
    /// Focus stop index; `CONTACT_FIELDS.len()` is the submit button
    active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        let values = CONTACT_FIELDS.iter().map(|f| (f.name, None)).collect();
        let mut form = Self {
            values,
            errors: ValidationErrors::new(),
            open_options: HashSet::new(),
            active_field_index: 0,
        };
        // First field is auto-focused; reveal it if it happens to be a choice group
        form.on_focus(0);
        form
    }

    /// Number of focus stops (every field plus the submit button)
    pub fn focus_stop_count(&self) -> usize {
        CONTACT_FIELDS.len() + 1
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn active_descriptor(&self) -> Option<&'static FieldDescriptor> {
        CONTACT_FIELDS.get(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == CONTACT_FIELDS.len()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_options.contains(name)
    }

    fn has_value(&self, name: &str) -> bool {
        self.value(name).is_some_and(|v| !v.is_empty())
    }

    /// Set a single field's value. Unknown names are ignored.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = descriptor(name) {
            self.values.insert(field.name, Some(value.into()));
        }
    }

    fn open(&mut self, name: &str) {
        if let Some(field) = descriptor(name).filter(|f| f.is_choice()) {
            self.open_options.insert(field.name);
        }
    }

    fn on_focus(&mut self, index: usize) {
        if let Some(field) = CONTACT_FIELDS.get(index) {
            self.open(field.name);
        }
    }

    /// Move focus to a focus stop, validating the field being left
    pub fn focus_field(&mut self, index: usize) {
        let index = index.min(CONTACT_FIELDS.len());
        if index == self.active_field_index {
            return;
        }
        if let Some(left) = self.active_descriptor() {
            self.validate_field(left.name);
        }
        self.active_field_index = index;
        self.on_focus(index);
    }

    pub fn next_field(&mut self) {
        let next = (self.active_field_index + 1) % self.focus_stop_count();
        self.focus_field(next);
    }

    pub fn prev_field(&mut self) {
        let count = self.focus_stop_count();
        let prev = (self.active_field_index + count - 1) % count;
        self.focus_field(prev);
    }

    fn active_text_field(&self) -> Option<&'static FieldDescriptor> {
        self.active_descriptor().filter(|f| !f.is_choice())
    }

    /// Append a character to the active text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field() {
            self.values
                .entry(field.name)
                .or_default()
                .get_or_insert_with(String::new)
                .push(c);
        }
    }

    /// Remove the last character of the active text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field() {
            if let Some(Some(value)) = self.values.get_mut(field.name) {
                value.pop();
            }
        }
    }

    /// Insert a line break when the active field is multi-line
    pub fn newline(&mut self) {
        if self.active_descriptor().is_some_and(|f| f.is_multiline()) {
            self.input_char('\n');
        }
    }

    /// Index of the selected option in the active choice group
    pub fn selected_option(&self, field: &FieldDescriptor) -> Option<usize> {
        self.value(field.name).and_then(|v| field.option_index(v))
    }

    fn step_option(&mut self, forward: bool) {
        let Some(field) = self.active_descriptor().filter(|f| f.is_choice()) else {
            return;
        };
        let count = field.options.len();
        let next = match self.selected_option(field) {
            None => 0,
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
        };
        self.open(field.name);
        self.set_field_value(field.name, field.options[next].key());
    }

    /// Select the following option in the active choice group
    pub fn highlight_next_option(&mut self) {
        self.step_option(true);
    }

    /// Select the preceding option in the active choice group
    pub fn highlight_prev_option(&mut self) {
        self.step_option(false);
    }

    /// Select an option of the active choice group and reveal the next field
    pub fn select_option(&mut self, option_index: usize) {
        let Some(field) = self.active_descriptor().filter(|f| f.is_choice()) else {
            return;
        };
        let Some(option) = field.options.get(option_index) else {
            return;
        };
        self.set_field_value(field.name, option.key());
        self.advance_from(field.name);
    }

    /// Confirm the active choice group's current option, selecting the first when empty
    pub fn confirm_option(&mut self) {
        if let Some(field) = self.active_descriptor().filter(|f| f.is_choice()) {
            let index = self.selected_option(field).unwrap_or(0);
            self.select_option(index);
        }
    }

    /// Sequential reveal: open the next field and focus it. Leaving a choice
    /// group also defaults an empty following group to its first option.
    pub fn advance_from(&mut self, name: &str) {
        let Some(index) = index_of(name) else {
            return;
        };
        let from_choice = CONTACT_FIELDS[index].is_choice();
        let next_index = index + 1;
        if let Some(next) = CONTACT_FIELDS.get(next_index) {
            self.open(next.name);
            if from_choice && next.is_choice() && !self.has_value(next.name) {
                if let Some(key) = next.first_option_key() {
                    self.set_field_value(next.name, key);
                }
            }
        }
        self.focus_field(next_index);
    }

    /// Blur validation of a single field
    pub fn validate_field(&mut self, name: &str) {
        let Some(field) = descriptor(name) else {
            return;
        };
        match validate_value(field.name, self.values.get(field.name).and_then(Option::as_ref)) {
            Some(message) => {
                self.errors.insert(field.name, message);
            }
            None => {
                self.errors.remove(field.name);
            }
        }
    }

    /// Whole-schema validation; returns true when the form is valid
    pub fn validate_all(&mut self) -> bool {
        self.errors = CONTACT_FIELDS
            .iter()
            .filter_map(|f| {
                validate_value(f.name, self.values.get(f.name).and_then(Option::as_ref))
                    .map(|message| (f.name, message))
            })
            .collect();
        self.errors.is_empty()
    }

    /// Build the payload sent to the CRM, mapping values through option tables
    pub fn build_submission(&self, page_uri: &str, page_name: &str) -> Submission {
        let fields = CONTACT_FIELDS
            .iter()
            .map(|field| {
                let value = self.value(field.name).map(|raw| {
                    field
                        .option_by_key(raw)
                        .map(|option| option.remote_value.to_json())
                        .unwrap_or_else(|| serde_json::Value::String(raw.to_string()))
                });
                SubmissionField {
                    object_type_id: CONTACT_OBJECT_TYPE,
                    name: field.remote_field,
                    value,
                }
            })
            .collect();

        Submission {
            page_uri: page_uri.to_string(),
            page_name: page_name.to_string(),
            fields,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
