// File: src/confirmation.rs
// Purpose: Reading the stored user record back for the confirmation view

use crate::error::{FormError, FormResult};
use crate::record::UserRecord;
use crate::storage::KeyValueStore;

/// Read the record a successful submit stored under `key`
///
/// `Ok(None)` when nothing was stored yet.
pub fn load_user_record<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> FormResult<Option<UserRecord>> {
    let raw = store.get(key).map_err(|source| FormError::Store {
        backend: store.name(),
        key: key.to_string(),
        source,
    })?;

    let Some(raw) = raw else {
        return Ok(None);
    };

    UserRecord::from_json(&raw)
        .map(Some)
        .map_err(|source| FormError::Corrupt {
            key: key.to_string(),
            source,
        })
}

/// What the confirmation view shows
///
/// Values are plain text. Callers must insert them as text, never as markup,
/// so a name like `<script>` is displayed literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    record: UserRecord,
}

impl ConfirmationView {
    pub fn new(record: UserRecord) -> Self {
        Self { record }
    }

    /// Load from the store, `None` when no record was stored
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> FormResult<Option<Self>> {
        Ok(load_user_record(store, key)?.map(Self::new))
    }

    pub fn heading(&self) -> String {
        format!("¡Bienvenido, {}!", self.record.nombre)
    }

    /// (element id, text) pairs for the user info block
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("userNameDisplay", self.record.nombre.as_str()),
            ("userEmail", self.record.email.as_str()),
            ("userBirthdate", self.record.fecha_nacimiento.as_str()),
        ]
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn test_missing_record() {
        let store = MemoryStore::new();
        assert_eq!(load_user_record(&store, "userData").unwrap(), None);
        assert!(ConfirmationView::load(&store, "userData").unwrap().is_none());
    }

    #[test]
    fn test_load_stored_record() {
        let store = MemoryStore::new();
        store
            .put(
                "userData",
                r#"{"nombre":"Ana Torres","email":"ana.torres@example.com","fechaNacimiento":"1985-07-15"}"#,
            )
            .unwrap();

        let view = ConfirmationView::load(&store, "userData").unwrap().unwrap();
        assert_eq!(view.heading(), "¡Bienvenido, Ana Torres!");
        assert_eq!(
            view.entries(),
            [
                ("userNameDisplay", "Ana Torres"),
                ("userEmail", "ana.torres@example.com"),
                ("userBirthdate", "1985-07-15"),
            ]
        );
    }

    #[test]
    fn test_corrupt_record() {
        let store = MemoryStore::new();
        store.put("userData", "not json").unwrap();

        let err = load_user_record(&store, "userData").unwrap_err();
        assert!(matches!(err, FormError::Corrupt { ref key, .. } if key == "userData"));
    }

    #[test]
    fn test_script_name_is_kept_verbatim() {
        let record = UserRecord::new("<script>alert(\"XSS\")</script>", "test@example.com", "");
        let view = ConfirmationView::new(record);
        assert_eq!(view.entries()[0].1, "<script>alert(\"XSS\")</script>");
    }
}
