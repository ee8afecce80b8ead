//! # registro-form
//!
//! Controller for the registration form. It reads field values through a
//! [`FormView`], applies the rules from `registro-validation`, keeps one
//! validity flag per validated field and only enables the submit control when
//! all of them hold. A successful submit stores the [`UserRecord`] as JSON in
//! a [`KeyValueStore`] and hands off to a [`Navigator`].
//!
//! ## Example
//!
//! ```rust
//! use registro_form::{
//!     Field, FormEvent, FormValidator, MemoryFormView, MemoryStore, RecordingNavigator,
//!     SubmitOutcome,
//! };
//!
//! let mut view = MemoryFormView::new();
//! view.set_text(Field::Nombre, "Ana Torres");
//! view.set_text(Field::Email, "ana.torres@example.com");
//! view.set_text(Field::Password, "Clave123");
//! view.set_text(Field::ConfirmPassword, "Clave123");
//! view.set_text(Field::FechaNacimiento, "1985-07-15");
//! view.set_checked(Field::Terminos, true);
//!
//! let mut form = FormValidator::new(view, MemoryStore::new(), RecordingNavigator::new());
//! let outcome = form.handle(FormEvent::Submit).unwrap();
//! assert!(matches!(outcome, Some(SubmitOutcome::Submitted(_))));
//! ```

pub mod config;
pub mod confirmation;
pub mod controller;
pub mod error;
pub mod field;
pub mod navigation;
pub mod record;
pub mod state;
pub mod storage;
pub mod view;

pub use config::{FilesystemConfig, FormConfig, StorageBackend};
pub use confirmation::{load_user_record, ConfirmationView};
pub use controller::{FormSnapshot, FieldStatus, FormValidator, SubmitOutcome, SubmitState};
pub use error::{FormError, FormResult};
pub use field::{Field, FieldValue, FormEvent, Trigger};
pub use navigation::{Navigator, RecordingNavigator};
pub use record::UserRecord;
pub use state::ValidationState;
pub use storage::{filesystem::FilesystemStore, memory::MemoryStore, KeyValueStore};
pub use view::{ErrorDisplay, FormView, MemoryFormView};

pub use registro_validation as rules;

/// Default key the user record is stored under
pub const DEFAULT_STORAGE_KEY: &str = "userData";

/// Default view shown after a successful submit
pub const DEFAULT_CONFIRMATION_VIEW: &str = "confirmacion.html";
