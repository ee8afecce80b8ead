//! Terms and conditions checkbox

use crate::{RuleResult, RuleViolation};

/// Terms rule: the checkbox must be ticked
pub fn validate_terms(accepted: bool) -> RuleResult {
    if accepted {
        Ok(())
    } else {
        Err(RuleViolation::TermsNotAccepted)
    }
}
