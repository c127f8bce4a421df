use serde::{Deserialize, Serialize};

/// The single response body shape at the HTTP boundary.
///
/// Both the booking backend and this service answer with `{ "data": ... }`.
/// A body without `data`, or with `data` of the wrong shape, is a decoding
/// error rather than something to probe around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data, message: None }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}
