use secrecy::Secret;
use serde::Serialize;

/// Body of a `POST /login` request.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    #[serde(serialize_with = "super::expose_secret")]
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }
}
