use auth_forms::{
    client::AuthClient,
    forms::{Forms, SubmitResult, LOGIN_FORM, REGISTER_FORM},
    page::{FormPage, SubmitEvent, EMAIL, PASSWORD, USERNAME},
    telemetry::get_subscriber,
};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing_subscriber::util::SubscriberInitExt;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "auth_forms=trace,reqwest_tracing=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub auth_server: MockServer,
    pub forms: Forms,
}

impl TestApp {
    pub async fn submit_login(&self, page: &FormPage) -> (SubmitEvent, SubmitResult) {
        self.submit(LOGIN_FORM, page).await
    }

    pub async fn submit_register(&self, page: &FormPage) -> (SubmitEvent, SubmitResult) {
        self.submit(REGISTER_FORM, page).await
    }

    async fn submit(&self, form_id: &str, page: &FormPage) -> (SubmitEvent, SubmitResult) {
        let mut event = SubmitEvent::new(form_id);
        let outcome = self
            .forms
            .submit(&mut event, page)
            .await
            .expect("The form should have a handler.");
        (event, outcome)
    }

    /// Every request the mock backend saw, as `(path, json body)`.
    pub async fn received(&self) -> Vec<(String, Value)> {
        self.auth_server
            .received_requests()
            .await
            .expect("Request recording should be enabled.")
            .into_iter()
            .map(|r| {
                let body = serde_json::from_slice(&r.body).expect("The body should be JSON.");
                (r.url.path().to_owned(), body)
            })
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let auth_server = MockServer::start().await;
    let forms = Forms::on_ready(AuthClient::new(auth_server.uri()));

    TestApp { auth_server, forms }
}

/// Forms wired to an address nothing listens on.
pub fn spawn_unreachable_forms() -> Forms {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("The OS should allocate an available port")
        .local_addr()
        .unwrap()
        .port();
    forms_for(format!("http://127.0.0.1:{}", port))
}

/// Forms wired to a hand-rolled backend at `base_url`.
pub fn forms_for(base_url: String) -> Forms {
    Lazy::force(&TRACING);

    Forms::on_ready(AuthClient::new(base_url))
}

pub fn login_page(username: &str, password: &str) -> FormPage {
    FormPage::new()
        .with_field(USERNAME, username)
        .with_field(PASSWORD, password)
}

pub fn register_page(username: &str, password: &str, email: &str) -> FormPage {
    login_page(username, password).with_field(EMAIL, email)
}
