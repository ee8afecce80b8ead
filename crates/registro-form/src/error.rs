// File: src/error.rs
// Purpose: Faults raised by the form controller and its collaborators
//
// A field failing its rule is not an error here; see `RuleViolation`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("form was already submitted")]
    AlreadySubmitted,

    #[error("failed to serialize user record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("stored user record under '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{backend} store failed for key '{key}': {source}")]
    Store {
        backend: &'static str,
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to navigate to '{view}': {source}")]
    Navigation {
        view: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type FormResult<T> = Result<T, FormError>;
