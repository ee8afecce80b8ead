// File: src/record.rs
// Purpose: The user data persisted on a successful submit

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::view::FormView;

/// Stored as `{"nombre": .., "email": .., "fechaNacimiento": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub nombre: String,
    pub email: String,
    pub fecha_nacimiento: String,
}

impl UserRecord {
    pub fn new(
        nombre: impl Into<String>,
        email: impl Into<String>,
        fecha_nacimiento: impl Into<String>,
    ) -> Self {
        Self {
            nombre: nombre.into(),
            email: email.into(),
            fecha_nacimiento: fecha_nacimiento.into(),
        }
    }

    /// Capture the values exactly as typed (no trimming)
    pub fn from_view<V: FormView + ?Sized>(view: &V) -> Self {
        Self {
            nombre: view.text(Field::Nombre),
            email: view.text(Field::Email),
            fecha_nacimiento: view.text(Field::FechaNacimiento),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
