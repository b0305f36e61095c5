//! The host page the form handlers run against.
//!
//! A page exposes its input fields by id, one message area that every
//! handler overwrites, and a way to move somewhere else.

mod event;
mod form_page;

pub use self::event::SubmitEvent;
pub use self::form_page::FormPage;

use crate::domain::Location;

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const EMAIL: &str = "email";

pub trait Page: Send + Sync {
    /// Current value of the input with this id, if the page has one.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Replaces the text of the message area.
    fn set_message(&self, text: &str);

    fn navigate(&self, location: Location);

    /// Like [`Page::field_value`], with absent fields read as empty.
    fn read_field(&self, id: &str) -> String {
        self.field_value(id).unwrap_or_default()
    }
}
