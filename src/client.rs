use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Credentials, RegistrationData},
    error::RequestFailed,
};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Body of a 2xx answer. Opaque to the form handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

impl ServerResponse {
    /// The session token, when the body is `{"token": "..."}`.
    pub fn token(&self) -> Option<String> {
        serde_json::from_str::<TokenBody>(&self.body)
            .ok()
            .map(|b| b.token)
    }
}

/// Talks to the login and registration endpoints of the shop backend.
///
/// One call is one request: no retries and no timeout beyond what the
/// transport itself imposes.
#[derive(Clone)]
pub struct AuthClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        let http_client = ClientBuilder::new(reqwest::Client::new())
            .with(TracingMiddleware::default())
            .build();

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<ServerResponse, RequestFailed> {
        self.post_json(LOGIN_PATH, credentials).await
    }

    pub async fn register(&self, data: &RegistrationData) -> Result<ServerResponse, RequestFailed> {
        self.post_json(REGISTER_PATH, data).await
    }

    #[tracing::instrument(
        name = "Posting to the auth server",
        skip(self, body),
        fields(url = tracing::field::Empty)
    )]
    async fn post_json<T>(&self, path: &str, body: &T) -> Result<ServerResponse, RequestFailed>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::Span::current().record("url", url.as_str());

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(detail = e.to_string(), "request did not get a response");
                RequestFailed::no_response()
            })?;

        let status = response.status();
        // A body that breaks off fails the request, whatever the status said.
        let body = response.text().await.map_err(|e| {
            tracing::warn!(
                status = status.as_u16(),
                detail = e.to_string(),
                "response body could not be read"
            );
            RequestFailed {
                status: Some(status.as_u16()),
                body: String::new(),
            }
        })?;

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "request succeeded");
            Ok(ServerResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            tracing::info!(status = status.as_u16(), "request was rejected");
            Err(RequestFailed {
                status: Some(status.as_u16()),
                body,
            })
        }
    }
}
