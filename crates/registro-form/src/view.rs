//! The page as the controller sees it
//!
//! [`FormView`] is everything the controller needs from the page: field
//! values, one error target per field and the submit control.
//! [`MemoryFormView`] keeps all of that in memory, which is what the tests
//! and headless callers drive.

use std::collections::{BTreeMap, BTreeSet};

use crate::field::{Field, FieldValue};

/// Page surface the form controller reads from and writes to
pub trait FormView {
    /// Current value of a field
    fn value(&self, field: Field) -> FieldValue;

    /// Show `message` in the field's error target and mark the input invalid
    fn show_error(&mut self, field: Field, message: &str);

    /// Clear the field's error target and its invalid mark
    fn hide_error(&mut self, field: Field);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Text content of a field
    fn text(&self, field: Field) -> String {
        self.value(field).into_text()
    }

    /// Checkbox state of a field
    fn is_checked(&self, field: Field) -> bool {
        self.value(field).is_checked()
    }
}

/// State of one error target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub text: String,
    pub visible: bool,
}

impl ErrorDisplay {
    pub fn show(&mut self, message: &str) {
        self.text = message.to_string();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.text.clear();
        self.visible = false;
    }
}

/// In-memory page
#[derive(Debug, Clone, Default)]
pub struct MemoryFormView {
    values: BTreeMap<Field, FieldValue>,
    errors: BTreeMap<Field, ErrorDisplay>,
    invalid: BTreeSet<Field>,
    submit_enabled: bool,
}

impl MemoryFormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text of an input
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.values.insert(field, FieldValue::Text(text.into()));
    }

    /// Tick or untick a checkbox
    pub fn set_checked(&mut self, field: Field, checked: bool) {
        self.values.insert(field, FieldValue::Checked(checked));
    }

    /// Reset a field to its empty value
    pub fn clear(&mut self, field: Field) {
        self.values.remove(&field);
    }

    /// Error target of a field
    pub fn error_display(&self, field: Field) -> ErrorDisplay {
        self.errors.get(&field).cloned().unwrap_or_default()
    }

    /// Visible error message, if any
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .get(&field)
            .filter(|display| display.visible)
            .map(|display| display.text.as_str())
    }

    pub fn is_error_visible(&self, field: Field) -> bool {
        self.error(field).is_some()
    }

    /// Whether the input carries the invalid mark
    pub fn is_marked_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Force the submit control on, as a page script bypassing `disabled` would
    pub fn force_submit_enabled(&mut self) {
        self.submit_enabled = true;
    }
}

impl FormView for MemoryFormView {
    fn value(&self, field: Field) -> FieldValue {
        self.values
            .get(&field)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty_for(field))
    }

    fn show_error(&mut self, field: Field, message: &str) {
        self.errors.entry(field).or_default().show(message);
        self.invalid.insert(field);
    }

    fn hide_error(&mut self, field: Field) {
        self.errors.entry(field).or_default().hide();
        self.invalid.remove(&field);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let view = MemoryFormView::new();
        assert_eq!(view.text(Field::Nombre), "");
        assert!(!view.is_checked(Field::Terminos));
        assert!(!view.is_submit_enabled());
    }

    #[test]
    fn test_show_and_hide_error() {
        let mut view = MemoryFormView::new();
        view.show_error(Field::Email, "Ingrese un correo electrónico con formato válido");

        assert_eq!(
            view.error(Field::Email),
            Some("Ingrese un correo electrónico con formato válido")
        );
        assert!(view.is_marked_invalid(Field::Email));

        view.hide_error(Field::Email);
        assert_eq!(view.error(Field::Email), None);
        assert_eq!(view.error_display(Field::Email), ErrorDisplay::default());
        assert!(!view.is_marked_invalid(Field::Email));
    }

    #[test]
    fn test_set_and_clear() {
        let mut view = MemoryFormView::new();
        view.set_text(Field::Password, "abc123");
        view.set_checked(Field::Terminos, true);
        assert_eq!(view.text(Field::Password), "abc123");
        assert!(view.is_checked(Field::Terminos));

        view.clear(Field::Password);
        view.clear(Field::Terminos);
        assert_eq!(view.text(Field::Password), "");
        assert!(!view.is_checked(Field::Terminos));
    }
}
