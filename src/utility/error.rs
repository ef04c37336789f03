use serde::Serialize;
use std::fmt::Display;

/// Error body returned for every failed request.
#[derive(Serialize)]
pub struct ResponseErrorMessage<T: Display + Serialize> {
    code: T,
    message: String,
}

impl<T: Display + Serialize> ResponseErrorMessage<T> {
    pub fn new(code: T) -> Self {
        let message = code.to_string();

        Self { code, message }
    }
}
