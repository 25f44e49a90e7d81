use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use shared::{AgentSession, ErrorResponse, Result, SharedError};

use crate::config::Config;

/// Creates a request carrying the agent's bearer token
pub fn authenticated_request(method: &str, url: &str, session: &AgentSession) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    req.header("Authorization", &session.bearer())
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str, session: &AgentSession) -> RequestBuilder {
    authenticated_request("POST", url, session)
}

/// Races `request` against a `timeout_ms` timer.
pub async fn with_timeout<T>(timeout_ms: u32, request: impl Future<Output = Result<T>>) -> Result<T> {
    match select(Box::pin(request), Box::pin(TimeoutFuture::new(timeout_ms))).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SharedError::Network(format!(
            "request timed out after {} ms",
            timeout_ms
        ))),
    }
}

/// Sends a built request, mapping transport failures and timeouts to `Network`.
pub async fn send(request: Request) -> Result<Response> {
    with_timeout(Config::request_timeout_ms(), async move {
        request
            .send()
            .await
            .map_err(|e| SharedError::Network(e.to_string()))
    })
    .await
}

/// Sends a request that has no body.
pub async fn send_builder(builder: RequestBuilder) -> Result<Response> {
    with_timeout(Config::request_timeout_ms(), async move {
        builder
            .send()
            .await
            .map_err(|e| SharedError::Network(e.to_string()))
    })
    .await
}

/// Turns a non-OK response into `Server`, keeping the backend's `{ error }` text.
pub async fn error_from_response(response: Response) -> SharedError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    SharedError::Server { status, message }
}

pub async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| SharedError::Decode(e.to_string()))
}
