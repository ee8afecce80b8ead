// File: src/email.rs
// Purpose: Email format rule

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{RuleResult, RuleViolation};

/// Local part of allowed characters, then dot-separated domain labels of
/// 1-63 alphanumerics/hyphens that neither start nor end with a hyphen.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

/// Validate email format (no trimming)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Text before the first '@' (the whole trimmed value when there is none)
pub fn email_local_part(email: &str) -> &str {
    email.trim().split('@').next().unwrap_or_default()
}

/// Email rule: required, then well-formed
pub fn validate_email(email: &str) -> RuleResult {
    let email = email.trim();

    if email.is_empty() {
        return Err(RuleViolation::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(RuleViolation::EmailFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("correo@valido.com")]
    #[case("juan@example.com")]
    #[case("ana.torres@example.com")]
    #[case("user+test.special_chars@example-domain.co.uk")]
    #[case("o'brien@example.ie")]
    #[case("admin@localhost")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("correo.invalido")]
    #[case("correo-invalido")]
    #[case("email-invalido")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@@example.com")]
    #[case("user@example..com")]
    #[case("user@-example.com")]
    #[case("user@example-.com")]
    #[case("user@exa mple.com")]
    #[case("usér@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }

    #[test]
    fn test_label_length_limit() {
        let label_63 = "a".repeat(63);
        let label_64 = "a".repeat(64);
        assert!(is_valid_email(&format!("user@{label_63}.com")));
        assert!(!is_valid_email(&format!("user@{label_64}.com")));
    }

    #[test]
    fn test_email_rule_priority() {
        assert_eq!(validate_email(""), Err(RuleViolation::EmailRequired));
        assert_eq!(validate_email("   "), Err(RuleViolation::EmailRequired));
        assert_eq!(validate_email("correo.invalido"), Err(RuleViolation::EmailFormat));
        assert!(validate_email("  correo@valido.com ").is_ok());
    }

    #[test]
    fn test_local_part() {
        assert_eq!(email_local_part("ana.torres@example.com"), "ana.torres");
        assert_eq!(email_local_part("sin-arroba"), "sin-arroba");
        assert_eq!(email_local_part("@example.com"), "");
        assert_eq!(email_local_part(""), "");
        assert_eq!(email_local_part("  lgomez@example.com "), "lgomez");
    }
}
