//! Registro Validation
//!
//! Field rules for the registration form. Every rule is a pure function over
//! the current field values and reports at most one [`RuleViolation`], the
//! first one that applies in priority order.
//!
//! Shared by the form controller (`registro-form`) and the browser bindings
//! (`registro-wasm`).

pub mod consent;
pub mod email;
pub mod password;
pub mod string;

pub use consent::*;
pub use email::*;
pub use password::*;
pub use string::*;

/// Result of applying one field rule
pub type RuleResult = Result<(), RuleViolation>;

/// A failed field rule
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RuleViolation {
    #[error("El nombre es obligatorio")]
    NameRequired,

    #[error("El correo electrónico es obligatorio")]
    EmailRequired,

    #[error("Ingrese un correo electrónico con formato válido")]
    EmailFormat,

    #[error("La contraseña es obligatoria")]
    PasswordRequired,

    #[error("La contraseña debe tener al menos 8 caracteres, una mayúscula, una minúscula y un número")]
    PasswordTooWeak,

    #[error("La contraseña no debe contener tu nombre")]
    PasswordContainsName,

    #[error("La contraseña no debe contener tu nombre de usuario de correo")]
    PasswordContainsEmailUser,

    #[error("La contraseña no debe contener más de 2 caracteres repetidos consecutivos")]
    PasswordRepeatedChars,

    #[error("Debe confirmar su contraseña")]
    ConfirmationRequired,

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    #[error("Debe aceptar los términos y condiciones")]
    TermsNotAccepted,
}

impl RuleViolation {
    /// Stable machine-readable code, used by the browser bindings
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::NameRequired => "name_required",
            RuleViolation::EmailRequired => "email_required",
            RuleViolation::EmailFormat => "email_format",
            RuleViolation::PasswordRequired => "password_required",
            RuleViolation::PasswordTooWeak => "password_too_weak",
            RuleViolation::PasswordContainsName => "password_contains_name",
            RuleViolation::PasswordContainsEmailUser => "password_contains_email_user",
            RuleViolation::PasswordRepeatedChars => "password_repeated_chars",
            RuleViolation::ConfirmationRequired => "confirmation_required",
            RuleViolation::PasswordMismatch => "password_mismatch",
            RuleViolation::TermsNotAccepted => "terms_not_accepted",
        }
    }
}
