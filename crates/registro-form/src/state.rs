// File: src/state.rs
// Purpose: Per-field validity flags for one form instance

use std::collections::BTreeMap;

use crate::field::Field;

/// Validity flag for every validated field
///
/// All five keys of [`Field::VALIDATED`] are always present and start out
/// `false`; the form is valid only when every flag is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationState {
    flags: BTreeMap<Field, bool>,
}

impl ValidationState {
    /// All fields unvalidated
    pub fn new() -> Self {
        Self {
            flags: Field::VALIDATED.into_iter().map(|field| (field, false)).collect(),
        }
    }

    /// Record the outcome of a field validator
    ///
    /// Fields without a rule (the birth date) are ignored.
    pub fn set(&mut self, field: Field, valid: bool) {
        if let Some(flag) = self.flags.get_mut(&field) {
            *flag = valid;
        }
    }

    /// Current flag, `None` for fields without a rule
    pub fn get(&self, field: Field) -> Option<bool> {
        self.flags.get(&field).copied()
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.get(field).unwrap_or(false)
    }

    /// True when every flag is set
    pub fn is_form_valid(&self) -> bool {
        self.flags.values().all(|valid| *valid)
    }

    /// Fields currently failing, in form order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::VALIDATED
            .into_iter()
            .filter(|field| !self.is_valid(*field))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.flags.iter().map(|(field, valid)| (*field, *valid))
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_false() {
        let state = ValidationState::new();
        assert_eq!(state.iter().count(), 5);
        assert!(state.iter().all(|(_, valid)| !valid));
        assert!(!state.is_form_valid());
        assert_eq!(state.invalid_fields(), Field::VALIDATED.to_vec());
    }

    #[test]
    fn test_form_valid_only_when_all_set() {
        let mut state = ValidationState::new();
        for field in Field::VALIDATED {
            assert!(!state.is_form_valid());
            state.set(field, true);
        }
        assert!(state.is_form_valid());

        state.set(Field::ConfirmPassword, false);
        assert!(!state.is_form_valid());
        assert_eq!(state.invalid_fields(), vec![Field::ConfirmPassword]);
    }

    #[test]
    fn test_unvalidated_field_is_ignored() {
        let mut state = ValidationState::new();
        state.set(Field::FechaNacimiento, true);
        assert_eq!(state.get(Field::FechaNacimiento), None);
        assert_eq!(state.iter().count(), 5);
    }
}
