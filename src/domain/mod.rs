pub mod credentials;
pub mod location;
pub mod registration;

pub use self::credentials::Credentials;
pub use self::location::Location;
pub use self::registration::RegistrationData;

use secrecy::{ExposeSecret, Secret};
use serde::Serializer;

/// Writes a secret string in clear. Only request bodies go through here.
fn expose_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
