use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use super::Page;
use crate::domain::Location;

/// An in-memory page: fixed field values, a message area and a record of
/// every navigation.
#[derive(Debug, Default)]
pub struct FormPage {
    fields: HashMap<String, String>,
    message: Mutex<String>,
    navigations: Mutex<Vec<Location>>,
}

impl FormPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(id.into(), value.into());
        self
    }

    pub fn message(&self) -> String {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn navigations(&self) -> Vec<Location> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Where the page ended up, if it navigated at all.
    pub fn location(&self) -> Option<Location> {
        self.navigations().pop()
    }
}

impl Page for FormPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }

    fn set_message(&self, text: &str) {
        let mut message = self.message.lock().unwrap_or_else(PoisonError::into_inner);
        message.clear();
        message.push_str(text);
    }

    fn navigate(&self, location: Location) {
        tracing::debug!(%location, "navigating");
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location);
    }
}
