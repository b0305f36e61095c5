/// The single failure kind a submission can end in.
///
/// Transport errors and non-2xx statuses are not told apart by the handlers:
/// whatever body the server sent is what ends up in the message area.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("request failed ({}): {body}", describe_status(.status))]
pub struct RequestFailed {
    /// `None` when no response arrived at all.
    pub status: Option<u16>,
    pub body: String,
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_owned(),
    }
}

impl RequestFailed {
    pub fn no_response() -> Self {
        Self {
            status: None,
            body: String::new(),
        }
    }
}
