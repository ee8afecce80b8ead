//! Password strength and confirmation rules

use crate::email::email_local_part;
use crate::string::{contains_ignore_case, first_word, has_repeated_run};
use crate::{RuleResult, RuleViolation};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest allowed run of one repeated character
pub const MAX_REPEATED_RUN: usize = 2;

/// Other field values the password rule depends on
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordContext<'a> {
    /// Current value of the name field
    pub name: &'a str,
    /// Current value of the email field
    pub email: &'a str,
}

impl<'a> PasswordContext<'a> {
    pub fn new(name: &'a str, email: &'a str) -> Self {
        Self { name, email }
    }
}

/// 8+ chars on a single line with at least one ASCII lowercase letter,
/// uppercase letter and digit
///
/// The regex crate doesn't support lookaheads, so the classes are checked
/// one by one.
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_lowercase && has_uppercase && has_digit
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Password rule, first failing check wins:
///
/// 1. required
/// 2. strength ([`is_strong_password`])
/// 3. must not contain the first word of the name
/// 4. must not contain the email user name
/// 5. no character repeated more than [`MAX_REPEATED_RUN`] times in a row
///
/// Checks 3 and 4 are skipped while the name or email is still blank.
pub fn validate_password(password: &str, context: PasswordContext<'_>) -> RuleResult {
    if password.is_empty() {
        return Err(RuleViolation::PasswordRequired);
    }

    if !is_strong_password(password) {
        return Err(RuleViolation::PasswordTooWeak);
    }

    if let Some(name) = first_word(context.name) {
        if contains_ignore_case(password, name) {
            return Err(RuleViolation::PasswordContainsName);
        }
    }

    let email_user = email_local_part(context.email);
    if !email_user.is_empty() && contains_ignore_case(password, email_user) {
        return Err(RuleViolation::PasswordContainsEmailUser);
    }

    if has_repeated_run(password, MAX_REPEATED_RUN + 1) {
        return Err(RuleViolation::PasswordRepeatedChars);
    }

    Ok(())
}

/// Confirmation rule: required, then an exact match
pub fn validate_confirmation(password: &str, confirmation: &str) -> RuleResult {
    if confirmation.is_empty() {
        return Err(RuleViolation::ConfirmationRequired);
    }
    if confirmation != password {
        return Err(RuleViolation::PasswordMismatch);
    }

    Ok(())
}
