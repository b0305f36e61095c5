use secrecy::Secret;
use serde::Serialize;

/// Body of a `POST /register` request.
#[derive(Debug, Serialize)]
pub struct RegistrationData {
    pub username: String,
    #[serde(serialize_with = "super::expose_secret")]
    pub password: Secret<String>,
    pub email: String,
}

impl RegistrationData {
    pub fn new(username: String, password: String, email: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
            email,
        }
    }
}
