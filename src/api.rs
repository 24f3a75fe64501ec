use std::cell::RefCell;
use std::future::Future;

use futures::future::{AbortHandle, Abortable, LocalBoxFuture, Shared};
use futures::FutureExt;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::CheckError;

pub type ResponseFuture = LocalBoxFuture<'static, Result<Value, CheckError>>;

/// An issued request whose JSON body can be awaited any number of times.
#[derive(Clone)]
pub struct PendingRequest {
    url: String,
    response: Shared<ResponseFuture>,
    abort: AbortHandle,
}

impl PendingRequest {
    pub fn new<F>(url: impl Into<String>, response: F) -> Self
    where
        F: Future<Output = Result<Value, CheckError>> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let response = Abortable::new(response, registration)
            .map(|r| r.unwrap_or(Err(CheckError::Cancelled)))
            .boxed_local()
            .shared();
        Self {
            url: url.into(),
            response,
            abort,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn response(&self) -> ResponseFuture {
        self.response.clone().boxed_local()
    }

    /// Abort the request; anyone awaiting it sees [`CheckError::Cancelled`].
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    pub fn same_request(&self, other: &PendingRequest) -> bool {
        self.response.ptr_eq(&other.response)
    }
}

/// Capability the check runner is given to reach the check endpoint.
pub trait CheckApi {
    /// Issue "run the check now". Does not return the result itself.
    fn fetch_check(&self) -> PendingRequest;

    /// Track `requests` as the current set, replacing the previous one.
    fn set_current_requests(&self, requests: Vec<PendingRequest>);

    /// Responses of the tracked requests, in registration order.
    fn current_promises(&self) -> Vec<ResponseFuture>;

    fn cancel_current_requests(&self);
}

/// [`CheckApi`] backed by the browser `fetch` API.
pub struct HttpCheckApi {
    path_prefix: String,
    current: RefCell<Vec<PendingRequest>>,
}

impl HttpCheckApi {
    pub const CHECK_PATH: &'static str = "/api/check";

    pub fn new(path_prefix: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            current: RefCell::new(Vec::new()),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.path_prefix, path)
    }

    fn api_fetch(&self, path: &str) -> PendingRequest {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "issuing api request");
        PendingRequest::new(url.clone(), fetch_json(url))
    }
}

impl CheckApi for HttpCheckApi {
    fn fetch_check(&self) -> PendingRequest {
        self.api_fetch(Self::CHECK_PATH)
    }

    fn set_current_requests(&self, requests: Vec<PendingRequest>) {
        let previous = self.current.replace(requests);
        let current = self.current.borrow();
        for request in previous {
            if !current.iter().any(|c| c.same_request(&request)) {
                request.cancel();
            }
        }
    }

    fn current_promises(&self) -> Vec<ResponseFuture> {
        self.current.borrow().iter().map(PendingRequest::response).collect()
    }

    fn cancel_current_requests(&self) {
        for request in self.current.borrow_mut().drain(..) {
            request.cancel();
        }
    }
}

async fn fetch_json(url: String) -> Result<Value, CheckError> {
    let window = web_sys::window()
        .ok_or_else(|| CheckError::Network("No browser window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(CheckError::from_js)?
        .dyn_into()
        .map_err(CheckError::from_js)?;

    if !response.ok() {
        let message = read_json(&response)
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
        tracing::warn!(status = response.status(), url = %url, "api request failed");
        return Err(CheckError::Status {
            status: response.status(),
            status_text: response.status_text(),
            url: response.url(),
            message,
        });
    }

    read_json(&response).await
}

async fn read_json(response: &Response) -> Result<Value, CheckError> {
    let promise = response.json().map_err(CheckError::from_js)?;
    let body = JsFuture::from(promise)
        .await
        .map_err(|e| CheckError::Decode(CheckError::from_js(e).to_string()))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| CheckError::Decode(e.to_string()))
}
