//! Same-origin forwarding to the vocabulary backend.
//!
//! DESIGN
//! ======
//! The handler is a pass-through: method, path, query and body go upstream
//! unchanged along with a small allow-list of request headers; status, body
//! and the matching response headers come back. The host never inspects the
//! session cookie, it only carries it in both directions.
//!
//! ERROR HANDLING
//! ==============
//! Upstream status codes (including 4xx/5xx) are relayed as-is. Upstream
//! transport failures become `502 Bad Gateway`. On the inbound side, only a
//! body over [`MAX_BODY_BYTES`] is `413`; any other body read failure
//! (client disconnect, broken stream) is `400`.

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::state::AppState;

/// Largest request body the host will buffer before forwarding.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const REQUEST_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::COOKIE, header::ACCEPT];
const RESPONSE_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::SET_COOKIE, header::LOCATION, header::CACHE_CONTROL];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body too large")]
    BodyTooLarge,

    #[error("request body unreadable: {0}")]
    BodyRead(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Join the backend base URL with the incoming path and query.
#[must_use]
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Classify an inbound body failure; only the length limit is `BodyTooLarge`.
fn body_error(err: &axum::Error) -> ProxyError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return ProxyError::BodyTooLarge;
        }
        source = current.source();
    }
    ProxyError::BodyRead(err.to_string())
}

fn copy_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `POST /login`, `ANY /api/*`: forward the request to the backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.config.backend_url, &parts.uri);
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| body_error(&e))?;

    let mut upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(copy_headers(&parts.headers, &REQUEST_HEADERS));
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let resp = upstream.send().await.inspect_err(|e| {
        tracing::warn!(error = %e, upstream = %url, "upstream request failed");
    })?;
    let status = resp.status();
    let headers = copy_headers(resp.headers(), &RESPONSE_HEADERS);
    let bytes = resp.bytes().await?;

    tracing::debug!(method = %parts.method, upstream = %url, status = status.as_u16(), "forwarded");
    Ok((status, headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
