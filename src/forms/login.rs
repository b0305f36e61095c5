use async_trait::async_trait;
use tracing::Span;
use uuid::Uuid;

use super::{SubmitHandler, SubmitResult};
use crate::{
    client::AuthClient,
    domain::{Credentials, Location},
    page::{Page, SubmitEvent, PASSWORD, USERNAME},
};

pub const LOGIN_FORM: &str = "login-form";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const PROFILE_PATH: &str = "/profile";

pub struct LoginSubmitHandler {
    client: AuthClient,
}

impl LoginSubmitHandler {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmitHandler for LoginSubmitHandler {
    fn form_id(&self) -> &'static str {
        LOGIN_FORM
    }

    #[tracing::instrument(
        name = "Submitting the login form",
        skip_all,
        fields(submission_id = %Uuid::new_v4(), username = tracing::field::Empty)
    )]
    async fn on_submit(&self, event: &mut SubmitEvent, page: &dyn Page) -> SubmitResult {
        event.prevent_default();

        let credentials = Credentials::new(page.read_field(USERNAME), page.read_field(PASSWORD));
        Span::current().record("username", credentials.username.as_str());

        let result = self.client.login(&credentials).await;
        match &result {
            Ok(_) => {
                tracing::info!("login accepted");
                page.set_message(LOGIN_SUCCESS_MESSAGE);
                page.navigate(Location::new(PROFILE_PATH));
            }
            Err(e) => {
                tracing::info!(status = ?e.status, "login rejected");
                page.set_message(&e.body);
            }
        }

        result
    }
}
