//! `localStorage` and `window.location` behind the form's store/navigator traits

use anyhow::{anyhow, Result};
use registro_form::{KeyValueStore, Navigator};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, err)
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

/// Browser `localStorage`
#[derive(Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self> {
        let storage = window()?
            .local_storage()
            .map_err(|e| js_error("localStorage is not accessible", e))?
            .ok_or_else(|| anyhow!("localStorage is not available"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| js_error("localStorage.getItem failed", e))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error("localStorage.setItem failed", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error("localStorage.removeItem failed", e))
    }

    fn name(&self) -> &'static str {
        "localStorage"
    }
}

/// Navigates by assigning `window.location.href`
#[derive(Clone)]
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

impl Navigator for LocationNavigator {
    fn go_to(&mut self, view: &str) -> Result<()> {
        self.window
            .location()
            .set_href(view)
            .map_err(|e| js_error("failed to set location", e))
    }
}
