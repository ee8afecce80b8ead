//! String helpers and the name rule

use crate::{RuleResult, RuleViolation};

/// True when the value is empty after trimming surrounding whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// First whitespace-delimited token, if any
pub fn first_word(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

/// Case-insensitive substring check
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when some character appears `run` or more times in a row
pub fn has_repeated_run(value: &str, run: usize) -> bool {
    if run == 0 {
        return true;
    }

    let mut previous = None;
    let mut count = 0;

    for c in value.chars() {
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }

    false
}

/// Name rule: anything but whitespace
pub fn validate_name(name: &str) -> RuleResult {
    if is_blank(name) {
        Err(RuleViolation::NameRequired)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert_eq!(validate_name(""), Err(RuleViolation::NameRequired));
        assert_eq!(validate_name("   \t"), Err(RuleViolation::NameRequired));
        assert!(validate_name("Juan Pérez").is_ok());
        assert!(validate_name(&"A".repeat(100)).is_ok());
        assert!(validate_name("<script>alert(\"XSS\")</script>").is_ok());
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("Ana Torres"), Some("Ana"));
        assert_eq!(first_word("  Ana  Torres"), Some("Ana"));
        assert_eq!(first_word("   "), None);
        assert_eq!(first_word(""), None);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("MiJuanito1", "juan"));
        assert!(contains_ignore_case("ÁrbolAzul", "árbol"));
        assert!(!contains_ignore_case("Password123", "ana"));
    }

    #[test]
    fn test_repeated_run() {
        assert!(has_repeated_run("Paaass1", 3));
        assert!(has_repeated_run("x111", 3));
        assert!(!has_repeated_run("Paass11", 3));
        assert!(!has_repeated_run("", 3));
        assert!(has_repeated_run("ñññ", 3));
    }
}
