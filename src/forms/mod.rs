use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    client::{AuthClient, ServerResponse},
    error::RequestFailed,
    page::{Page, SubmitEvent},
};

mod login;
mod register;

pub use self::login::{LoginSubmitHandler, LOGIN_FORM, LOGIN_SUCCESS_MESSAGE, PROFILE_PATH};
pub use self::register::{RegisterSubmitHandler, REGISTER_FORM, REGISTER_SUCCESS_MESSAGE};

pub type SubmitResult = Result<ServerResponse, RequestFailed>;

/// Reacts to the submission of one form.
///
/// A handler prevents the default submission before doing anything else, then
/// leaves the page in its final state before returning.
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    fn form_id(&self) -> &'static str;

    async fn on_submit(&self, event: &mut SubmitEvent, page: &dyn Page) -> SubmitResult;
}

/// The forms of a page with their handlers attached.
pub struct Forms {
    handlers: HashMap<&'static str, Box<dyn SubmitHandler>>,
}

impl Forms {
    /// Attaches the login and registration handlers. Call it once, when the
    /// page structure is available.
    pub fn on_ready(client: AuthClient) -> Self {
        let mut forms = Self {
            handlers: HashMap::new(),
        };
        forms.bind(Box::new(LoginSubmitHandler::new(client.clone())));
        forms.bind(Box::new(RegisterSubmitHandler::new(client)));
        forms
    }

    fn bind(&mut self, handler: Box<dyn SubmitHandler>) {
        tracing::debug!(form_id = handler.form_id(), "binding submit handler");
        self.handlers.insert(handler.form_id(), handler);
    }

    pub fn is_bound(&self, form_id: &str) -> bool {
        self.handlers.contains_key(form_id)
    }

    /// Runs the handler bound to the event's form.
    ///
    /// Returns `None` for a form without a handler; the event is left alone so
    /// its default submission goes ahead.
    pub async fn submit(&self, event: &mut SubmitEvent, page: &dyn Page) -> Option<SubmitResult> {
        let Some(handler) = self.handlers.get(event.form_id()) else {
            tracing::debug!(form_id = event.form_id(), "no handler bound to form");
            return None;
        };

        Some(handler.on_submit(event, page).await)
    }
}
