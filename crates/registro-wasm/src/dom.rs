// File: src/dom.rs
// Purpose: The registration page bound to the form controller

use std::cell::RefCell;
use std::rc::Rc;

use registro_form::{
    ConfirmationView, Field, FieldValue, FormConfig, FormError, FormEvent, FormValidator, FormView,
    SubmitOutcome, Trigger, DEFAULT_STORAGE_KEY,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlButtonElement, HtmlInputElement};

use crate::browser::{window, LocalStorageStore, LocationNavigator};

const VISIBLE_CLASS: &str = "visible";
const INVALID_CLASS: &str = "invalid";

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

fn warn(message: &str, err: &JsValue) {
    console::warn_2(&JsValue::from_str(message), err);
}

/// Inputs are found by id (`#nombre`, ...), error targets by
/// `[data-error="<field>"]`.
pub struct DomFormView {
    document: Document,
    submit: HtmlButtonElement,
}

impl DomFormView {
    pub fn new(document: Document, submit: HtmlButtonElement) -> Self {
        Self { document, submit }
    }

    fn input(&self, field: Field) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(field.as_str())
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    }

    fn error_target(&self, field: Field) -> Option<Element> {
        let selector = format!("[data-error=\"{}\"]", field.as_str());
        match self.document.query_selector(&selector) {
            Ok(target) => target,
            Err(err) => {
                warn("error target lookup failed", &err);
                None
            }
        }
    }
}

impl FormView for DomFormView {
    fn value(&self, field: Field) -> FieldValue {
        match self.input(field) {
            Some(input) if field.is_checkbox() => FieldValue::Checked(input.checked()),
            Some(input) => FieldValue::Text(input.value()),
            None => FieldValue::empty_for(field),
        }
    }

    fn show_error(&mut self, field: Field, message: &str) {
        if let Some(target) = self.error_target(field) {
            target.set_text_content(Some(message));
            if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                warn("failed to show error", &err);
            }
        }
        if let Some(input) = self.input(field) {
            if let Err(err) = input.class_list().add_1(INVALID_CLASS) {
                warn("failed to mark input invalid", &err);
            }
        }
    }

    fn hide_error(&mut self, field: Field) {
        if let Some(target) = self.error_target(field) {
            target.set_text_content(Some(""));
            if let Err(err) = target.class_list().remove_1(VISIBLE_CLASS) {
                warn("failed to hide error", &err);
            }
        }
        if let Some(input) = self.input(field) {
            if let Err(err) = input.class_list().remove_1(INVALID_CLASS) {
                warn("failed to clear invalid mark", &err);
            }
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }
}

type BrowserForm = FormValidator<DomFormView, LocalStorageStore, LocationNavigator>;

/// Registration form running in the page
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new RegistroForm('registroForm', 'submitBtn');
/// ```
#[wasm_bindgen]
pub struct RegistroForm {
    inner: Rc<RefCell<BrowserForm>>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl RegistroForm {
    /// Bind to the form and submit button with the given ids
    ///
    /// `config` may be omitted or `{ storage_key, confirmation_view }`.
    #[wasm_bindgen(constructor)]
    pub fn new(form_id: &str, submit_id: &str, config: JsValue) -> Result<RegistroForm, JsValue> {
        let config: FormConfig = if config.is_undefined() || config.is_null() {
            FormConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let document = window()
            .map_err(to_js)?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let form_element = document
            .get_element_by_id(form_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", form_id)))?;
        let submit = document
            .get_element_by_id(submit_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", submit_id)))?
            .dyn_into::<HtmlButtonElement>()?;

        let view = DomFormView::new(document.clone(), submit);
        let store = LocalStorageStore::new().map_err(to_js)?;
        let navigator = LocationNavigator::new().map_err(to_js)?;
        let inner = Rc::new(RefCell::new(FormValidator::with_config(
            view, store, navigator, &config,
        )));

        let mut listeners = Vec::new();

        for field in Field::ALL {
            let Some(trigger) = field.trigger() else {
                continue;
            };
            let Some(input) = document.get_element_by_id(field.as_str()) else {
                continue;
            };
            let (event, event_name) = match trigger {
                Trigger::Blur => (FormEvent::Blur(field), "blur"),
                Trigger::Change => (FormEvent::Change(field), "change"),
            };

            let form = Rc::clone(&inner);
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                dispatch(&form, event);
            });
            input.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())?;
            listeners.push(listener);
        }

        let form = Rc::clone(&inner);
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            dispatch(&form, FormEvent::Submit);
        });
        form_element.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        listeners.push(on_submit);

        Ok(RegistroForm {
            inner,
            _listeners: listeners,
        })
    }

    /// `{ fields: [{ field, valid, message }], submitEnabled, submitState }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.inner.borrow().snapshot();
        Ok(serde_wasm_bindgen::to_value(&snapshot)?)
    }

    /// Run one field's validator; `undefined` for fields without a rule
    pub fn validate(&self, field_name: &str) -> Result<Option<bool>, JsValue> {
        let field: Field = field_name
            .parse()
            .map_err(|e: FormError| JsValue::from_str(&e.to_string()))?;
        Ok(self.inner.borrow_mut().validate_field(field))
    }

    /// Submit programmatically; true when the record was stored
    pub fn submit(&self) -> Result<bool, JsValue> {
        let outcome = self
            .inner
            .borrow_mut()
            .submit()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(matches!(outcome, SubmitOutcome::Submitted(_)))
    }
}

fn dispatch(form: &Rc<RefCell<BrowserForm>>, event: FormEvent) {
    let Ok(mut form) = form.try_borrow_mut() else {
        console::warn_1(&JsValue::from_str("form is busy, event dropped"));
        return;
    };
    if let Err(err) = form.handle(event) {
        console::error_1(&JsValue::from_str(&err.to_string()));
    }
}

/// Fill the confirmation page (`h1` and the user info block) from the stored record
///
/// Values go in as text content, so markup in a name is shown literally.
/// Returns false when no record is stored.
#[wasm_bindgen(js_name = renderConfirmation)]
pub fn render_confirmation(storage_key: Option<String>) -> Result<bool, JsValue> {
    let key = storage_key.unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
    let store = LocalStorageStore::new().map_err(to_js)?;

    let Some(confirmation) =
        ConfirmationView::load(&store, &key).map_err(|e| JsValue::from_str(&e.to_string()))?
    else {
        return Ok(false);
    };

    let document = window()
        .map_err(to_js)?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    // a heading that hosts #userNameDisplay keeps its own markup
    if let Some(heading) = document.query_selector("h1")? {
        if heading.query_selector("#userNameDisplay")?.is_none() {
            heading.set_text_content(Some(&confirmation.heading()));
        }
    }
    for (id, text) in confirmation.entries() {
        if let Some(element) = document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    Ok(true)
}
