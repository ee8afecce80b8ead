//! Registro WASM
//!
//! WebAssembly bindings for the registration form.
//! The quick functions run single rules from JavaScript; [`RegistroForm`]
//! binds the whole controller to the page, `localStorage` and
//! `window.location`.

use registro_form::Field;
use registro_validation::{self as rules, PasswordContext, RuleViolation};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod browser;
mod dom;

pub use browser::{LocalStorageStore, LocationNavigator};
pub use dom::{render_confirmation, DomFormView, RegistroForm};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Field values as JavaScript passes them to [`validate_field`]
///
/// Missing properties count as empty.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub fecha_nacimiento: String,
    pub terminos: bool,
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, violation: RuleViolation) -> Self {
        Self {
            field: field.as_str().to_string(),
            code: violation.code().to_string(),
            message: violation.to_string(),
        }
    }
}

/// Rule currently failing for one field, given all values
pub fn check_field(field: Field, values: &FormValues) -> Option<RuleViolation> {
    let result = match field {
        Field::Nombre => rules::validate_name(&values.nombre),
        Field::Email => rules::validate_email(&values.email),
        Field::Password => rules::validate_password(
            &values.password,
            PasswordContext::new(&values.nombre, &values.email),
        ),
        Field::ConfirmPassword => {
            rules::validate_confirmation(&values.password, &values.confirm_password)
        }
        Field::Terminos => rules::validate_terms(values.terminos),
        Field::FechaNacimiento => Ok(()),
    };
    result.err()
}

/// Every failing field, in form order
pub fn check_form(values: &FormValues) -> Vec<ValidationError> {
    Field::VALIDATED
        .into_iter()
        .filter_map(|field| check_field(field, values).map(|v| ValidationError::new(field, v)))
        .collect()
}

/// Validate a single field
///
/// # Arguments
/// * `field_name` - Name of the field, as in the markup (`confirmPassword`, ...)
/// * `values` - JavaScript object with the current form values
///
/// # Returns
/// The error message, or `null` when the field is valid
///
/// # Example (JavaScript)
/// ```javascript
/// const message = validateField('password', {
///     nombre: 'Ana Torres',
///     email: 'ana@example.com',
///     password: 'Clave123',
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, values: JsValue) -> Result<Option<String>, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e: registro_form::FormError| JsValue::from_str(&e.to_string()))?;
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    Ok(check_field(field, &values).map(|violation| violation.to_string()))
}

/// Validate every field at once
///
/// # Returns
/// Array of `{ field, code, message }` (empty if valid)
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;

    Ok(serde_wasm_bindgen::to_value(&check_form(&values))?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    rules::validate_email(email).is_ok()
}

/// Quick password validation
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str, name: &str, email: &str) -> Option<String> {
    rules::validate_password(password, PasswordContext::new(name, email))
        .err()
        .map(|violation| violation.to_string())
}
