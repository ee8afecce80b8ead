// File: src/controller.rs
// Purpose: Field validators, submit gating and the submit handler

use std::collections::BTreeMap;

use registro_validation::{
    validate_confirmation, validate_email, validate_name, validate_password, validate_terms,
    PasswordContext, RuleResult, RuleViolation,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::field::{Field, FormEvent};
use crate::navigation::Navigator;
use crate::record::UserRecord;
use crate::state::ValidationState;
use crate::storage::KeyValueStore;
use crate::view::FormView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Idle,
    Submitted,
}

/// Result of a submit attempt that did not fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some field failed; nothing was stored and the user stays on the form
    Rejected { invalid: Vec<Field> },
    /// Record stored and navigation requested
    Submitted(UserRecord),
}

/// Validity and visible message of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
    pub field: Field,
    pub valid: bool,
    pub message: Option<String>,
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub fields: Vec<FieldStatus>,
    pub submit_enabled: bool,
    pub submit_state: SubmitState,
}

/// Registration form controller
///
/// Owns the page surface, the store and the navigator for one form
/// lifetime. Every validator updates one error target and one flag, then
/// recomputes the submit control.
pub struct FormValidator<V, S, N> {
    view: V,
    store: S,
    navigator: N,
    state: ValidationState,
    violations: BTreeMap<Field, RuleViolation>,
    storage_key: String,
    confirmation_view: String,
    submit_state: SubmitState,
}

impl<V, S, N> FormValidator<V, S, N>
where
    V: FormView,
    S: KeyValueStore,
    N: Navigator,
{
    /// Controller with the default key and confirmation view
    pub fn new(view: V, store: S, navigator: N) -> Self {
        Self::with_config(view, store, navigator, &FormConfig::default())
    }

    /// Controller using the key and confirmation view from `config`
    ///
    /// The submit control starts disabled.
    pub fn with_config(view: V, store: S, navigator: N, config: &FormConfig) -> Self {
        let mut form = Self {
            view,
            store,
            navigator,
            state: ValidationState::new(),
            violations: BTreeMap::new(),
            storage_key: config.storage_key.clone(),
            confirmation_view: config.confirmation_view.clone(),
            submit_state: SubmitState::Idle,
        };
        form.update_submit_enabled();
        form
    }

    pub fn validate_name(&mut self) -> bool {
        let result = validate_name(&self.view.text(Field::Nombre));
        self.apply(Field::Nombre, result)
    }

    pub fn validate_email(&mut self) -> bool {
        let result = validate_email(&self.view.text(Field::Email));
        self.apply(Field::Email, result)
    }

    /// Validate the password, then the confirmation if it already has a value
    pub fn validate_password(&mut self) -> bool {
        let password = self.view.text(Field::Password);
        let name = self.view.text(Field::Nombre);
        let email = self.view.text(Field::Email);

        let result = validate_password(&password, PasswordContext::new(&name, &email));
        let valid = self.apply(Field::Password, result);

        if !self.view.text(Field::ConfirmPassword).is_empty() {
            self.validate_confirm_password();
        }

        valid
    }

    pub fn validate_confirm_password(&mut self) -> bool {
        let result = validate_confirmation(
            &self.view.text(Field::Password),
            &self.view.text(Field::ConfirmPassword),
        );
        self.apply(Field::ConfirmPassword, result)
    }

    pub fn validate_terms(&mut self) -> bool {
        let result = validate_terms(self.view.is_checked(Field::Terminos));
        self.apply(Field::Terminos, result)
    }

    /// Run the validator of one field; `None` for fields without a rule
    pub fn validate_field(&mut self, field: Field) -> Option<bool> {
        let valid = match field {
            Field::Nombre => self.validate_name(),
            Field::Email => self.validate_email(),
            Field::Password => self.validate_password(),
            Field::ConfirmPassword => self.validate_confirm_password(),
            Field::Terminos => self.validate_terms(),
            Field::FechaNacimiento => return None,
        };
        Some(valid)
    }

    /// Enable submit iff every field is valid; returns the new state
    pub fn update_submit_enabled(&mut self) -> bool {
        let enabled = self.state.is_form_valid();
        self.view.set_submit_enabled(enabled);
        enabled
    }

    /// Dispatch a page event
    ///
    /// Blur and change events run the validator of the field listening to
    /// that event kind and return `Ok(None)`. Submit returns its outcome.
    pub fn handle(&mut self, event: FormEvent) -> FormResult<Option<SubmitOutcome>> {
        match event {
            FormEvent::Submit => self.submit().map(Some),
            _ => {
                if let Some(field) = event.target() {
                    self.validate_field(field);
                }
                Ok(None)
            }
        }
    }

    /// Validate every field and, if all pass, store the record and navigate
    ///
    /// Runs regardless of the submit control's state, so a page that forced
    /// the control on still cannot submit an invalid form.
    pub fn submit(&mut self) -> FormResult<SubmitOutcome> {
        if self.submit_state == SubmitState::Submitted {
            return Err(FormError::AlreadySubmitted);
        }

        for field in Field::VALIDATED {
            self.validate_field(field);
        }

        if !self.state.is_form_valid() {
            let invalid = self.state.invalid_fields();
            info!(?invalid, "submit rejected");
            return Ok(SubmitOutcome::Rejected { invalid });
        }

        let record = UserRecord::from_view(&self.view);
        let json = record.to_json()?;

        if let Err(source) = self.store.put(&self.storage_key, &json) {
            warn!(
                key = %self.storage_key,
                backend = self.store.name(),
                error = %source,
                "failed to store user record"
            );
            return Err(FormError::Store {
                backend: self.store.name(),
                key: self.storage_key.clone(),
                source,
            });
        }
        self.submit_state = SubmitState::Submitted;
        info!(
            key = %self.storage_key,
            backend = self.store.name(),
            "user record stored"
        );

        self.navigator
            .go_to(&self.confirmation_view)
            .map_err(|source| FormError::Navigation {
                view: self.confirmation_view.clone(),
                source,
            })?;

        Ok(SubmitOutcome::Submitted(record))
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let fields = Field::VALIDATED
            .into_iter()
            .map(|field| FieldStatus {
                field,
                valid: self.state.is_valid(field),
                message: self.violations.get(&field).map(ToString::to_string),
            })
            .collect();

        FormSnapshot {
            fields,
            submit_enabled: self.state.is_form_valid(),
            submit_state: self.submit_state,
        }
    }

    /// Rule currently failing for a field
    pub fn violation(&self, field: Field) -> Option<RuleViolation> {
        self.violations.get(&field).copied()
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state.is_form_valid()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the page, e.g. to type into a field
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_parts(self) -> (V, S, N) {
        (self.view, self.store, self.navigator)
    }

    /// Show or hide the field's error, record its flag, refresh submit
    fn apply(&mut self, field: Field, result: RuleResult) -> bool {
        let valid = match result {
            Ok(()) => {
                self.view.hide_error(field);
                self.violations.remove(&field);
                true
            }
            Err(violation) => {
                self.view.show_error(field, &violation.to_string());
                self.violations.insert(field, violation);
                false
            }
        };

        self.state.set(field, valid);
        debug!(field = field.as_str(), valid, "field validated");
        self.update_submit_enabled();
        valid
    }
}
