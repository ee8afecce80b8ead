// File: src/field.rs
// Purpose: Form fields, their values and the events that trigger validation

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A field of the registration form, named as in the page markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Nombre,
    Email,
    Password,
    ConfirmPassword,
    FechaNacimiento,
    Terminos,
}

impl Field {
    /// All fields in tab order
    pub const ALL: [Field; 6] = [
        Field::Nombre,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::FechaNacimiento,
        Field::Terminos,
    ];

    /// Fields that carry a validity flag, in the order submit checks them
    pub const VALIDATED: [Field; 5] = [
        Field::Nombre,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terminos,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::FechaNacimiento => "fechaNacimiento",
            Field::Terminos => "terminos",
        }
    }

    pub const fn is_validated(self) -> bool {
        !matches!(self, Field::FechaNacimiento)
    }

    pub const fn is_checkbox(self) -> bool {
        matches!(self, Field::Terminos)
    }

    /// Event that runs this field's validator, if it has one
    pub const fn trigger(self) -> Option<Trigger> {
        match self {
            Field::Terminos => Some(Trigger::Change),
            Field::FechaNacimiento => None,
            _ => Some(Trigger::Blur),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current raw value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Text content; a checkbox has none
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => String::new(),
        }
    }

    /// Checkbox state; a text input is never checked
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// Empty value for a field of the given kind
    pub fn empty_for(field: Field) -> Self {
        if field.is_checkbox() {
            FieldValue::Checked(false)
        } else {
            FieldValue::Text(String::new())
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

/// Kind of UI event a field listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Input lost focus
    Blur,
    /// Checkbox toggled
    Change,
}

/// Something the page reports to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Blur(Field),
    Change(Field),
    Submit,
}

impl FormEvent {
    /// Field whose validator this event runs, if any
    pub fn target(self) -> Option<Field> {
        let (field, trigger) = match self {
            FormEvent::Blur(field) => (field, Trigger::Blur),
            FormEvent::Change(field) => (field, Trigger::Change),
            FormEvent::Submit => return None,
        };
        (field.trigger() == Some(trigger)).then_some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "newsletter".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "newsletter"
        ));
    }

    #[test]
    fn test_serde_names_match_markup() {
        let json = serde_json::to_string(&Field::ConfirmPassword).unwrap();
        assert_eq!(json, "\"confirmPassword\"");
        let field: Field = serde_json::from_str("\"fechaNacimiento\"").unwrap();
        assert_eq!(field, Field::FechaNacimiento);
    }

    #[test]
    fn test_triggers() {
        assert_eq!(Field::Nombre.trigger(), Some(Trigger::Blur));
        assert_eq!(Field::Terminos.trigger(), Some(Trigger::Change));
        assert_eq!(Field::FechaNacimiento.trigger(), None);
    }

    #[test]
    fn test_event_targets() {
        assert_eq!(FormEvent::Blur(Field::Email).target(), Some(Field::Email));
        assert_eq!(FormEvent::Change(Field::Terminos).target(), Some(Field::Terminos));
        // wrong event kind for the field
        assert_eq!(FormEvent::Change(Field::Email).target(), None);
        assert_eq!(FormEvent::Blur(Field::Terminos).target(), None);
        assert_eq!(FormEvent::Blur(Field::FechaNacimiento).target(), None);
        assert_eq!(FormEvent::Submit.target(), None);
    }

    #[test]
    fn test_field_values() {
        assert_eq!(FieldValue::from("hola").as_text(), "hola");
        assert_eq!(FieldValue::from(true).as_text(), "");
        assert!(FieldValue::from(true).is_checked());
        assert!(!FieldValue::from("true").is_checked());
        assert_eq!(FieldValue::empty_for(Field::Terminos), FieldValue::Checked(false));
        assert_eq!(FieldValue::empty_for(Field::Email), FieldValue::Text(String::new()));
    }
}
