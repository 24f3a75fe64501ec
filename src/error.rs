use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a check run produced no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Transport failure, or an opaque rejection passed through verbatim.
    #[error("{0}")]
    Network(String),

    #[error("{status} {status_text}: {url}{}", detail(.message))]
    Status {
        status: u16,
        status_text: String,
        url: String,
        message: Option<String>,
    },

    #[error("Unexpected check response: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("No check request was issued")]
    EmptyResponse,
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => format!(" ({})", m),
        _ => String::new(),
    }
}

impl CheckError {
    /// Map a rejected JS promise into a network error, keeping whatever
    /// message the browser attached.
    pub fn from_js(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return CheckError::Network(String::from(err.message()));
        }
        CheckError::Network(value.as_string().unwrap_or_else(|| "Unknown error".to_string()))
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::Decode(err.to_string())
    }
}

impl From<CheckError> for String {
    fn from(err: CheckError) -> Self {
        err.to_string()
    }
}
