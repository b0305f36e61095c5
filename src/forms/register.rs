use async_trait::async_trait;
use tracing::Span;
use uuid::Uuid;

use super::{SubmitHandler, SubmitResult};
use crate::{
    client::AuthClient,
    domain::RegistrationData,
    page::{Page, SubmitEvent, EMAIL, PASSWORD, USERNAME},
};

pub const REGISTER_FORM: &str = "register-form";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful!";

pub struct RegisterSubmitHandler {
    client: AuthClient,
}

impl RegisterSubmitHandler {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubmitHandler for RegisterSubmitHandler {
    fn form_id(&self) -> &'static str {
        REGISTER_FORM
    }

    #[tracing::instrument(
        name = "Submitting the registration form",
        skip_all,
        fields(submission_id = %Uuid::new_v4(), username = tracing::field::Empty)
    )]
    async fn on_submit(&self, event: &mut SubmitEvent, page: &dyn Page) -> SubmitResult {
        event.prevent_default();

        let data = RegistrationData::new(
            page.read_field(USERNAME),
            page.read_field(PASSWORD),
            page.read_field(EMAIL),
        );
        Span::current().record("username", data.username.as_str());

        // No navigation here: the user stays on the registration page.
        let result = self.client.register(&data).await;
        match &result {
            Ok(_) => {
                tracing::info!("registration accepted");
                page.set_message(REGISTER_SUCCESS_MESSAGE);
            }
            Err(e) => {
                tracing::info!(status = ?e.status, "registration rejected");
                page.set_message(&e.body);
            }
        }

        result
    }
}
