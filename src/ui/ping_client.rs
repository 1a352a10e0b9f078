//! Browser-side client for the ping endpoint
//!
//! Issues `GET /api/v1/ping` with gloo-net and races it against a timer so a
//! hung request turns into `PingError::Timeout`.

use std::future::Future;

use futures::future::{Either, select};

use crate::core::{PingError, PingResponse};

/// Race a ping request against a timer
///
/// The request wins when both are ready at the same poll.
pub async fn with_timeout<F, T>(
    request: F,
    timer: T,
    timeout_ms: u32,
) -> Result<PingResponse, PingError>
where
    F: Future<Output = Result<PingResponse, PingError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(PingError::Timeout(timeout_ms)),
    }
}

/// Fetch the ping endpoint once
#[cfg(not(feature = "ssr"))]
pub async fn fetch_ping() -> Result<PingResponse, PingError> {
    use crate::core::{PING_ENDPOINT, PING_TIMEOUT_MS};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    let request = async {
        let response = Request::get(PING_ENDPOINT)
            .send()
            .await
            .map_err(|e| PingError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PingError::Network(e.to_string()))?;
        PingResponse::from_http(status, &body)
    };

    with_timeout(request, TimeoutFuture::new(PING_TIMEOUT_MS), PING_TIMEOUT_MS).await
}

/// SSR stub - the ping action only runs in the browser
#[cfg(feature = "ssr")]
pub async fn fetch_ping() -> Result<PingResponse, PingError> {
    Err(PingError::Network(
        "ping is only available in the browser".to_string(),
    ))
}
