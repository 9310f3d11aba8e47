//! The one fetch primitive every REST-backed resolver composes.
//!
//! Discipline: send, read the body as *text*, branch on the status, and
//! only then parse. Failure bodies are not guaranteed to be JSON and must
//! survive as diagnostics instead of dying in the parser.

use http::{HeaderMap, Method};
use serde_json::Value;
use url::Url;

use crate::{context::OkapiContext, error::Error};

/// Starts a request carrying the connection's headers.
pub fn request(method: Method, url: Url, headers: &HeaderMap) -> reqwest::RequestBuilder {
    reqwest::Client::new().request(method, url).headers(headers.clone())
}

/// Sends a request and hands back the raw body on success.
///
/// Any status >= 400 is a failure; the body is reported verbatim as the
/// error, untouched by any decoding.
pub async fn send(request: reqwest::RequestBuilder, url: &Url) -> Result<String, Error> {
    let response = request.send().await.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    if status.as_u16() >= 400 {
        return Err(Error::RemoteRequest { status, body });
    }

    Ok(body)
}

/// Sends a request and parses the successful body as JSON. A body that
/// fails to parse under a success status propagates as an error rather
/// than being swallowed.
pub async fn send_and_parse(request: reqwest::RequestBuilder, url: &Url) -> Result<Value, Error> {
    let body = send(request, url).await?;

    serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
        url: url.to_string(),
        source,
    })
}

/// GETs a JSON document from the service.
pub async fn get_json(ctx: &OkapiContext, url: Url) -> Result<Value, Error> {
    tracing::debug!(url = %url, "GET");

    let request = request(Method::GET, url.clone(), ctx.headers());
    send_and_parse(request, &url).await
}
