use http::StatusCode;

/// What can go wrong while resolving a REST-backed field.
///
/// Failure bodies travel verbatim: Okapi modules answer with plain-text
/// diagnostics at least as often as JSON, so the body *is* the message.
/// Every variant surfaces on the field being resolved and never aborts
/// sibling resolutions.
///
/// A missing link identifier is deliberately not represented here; per
/// the resolution rules it is a null result, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with a failure status. The body was read as
    /// text and is reported untouched, never fed to the JSON parser.
    #[error("{body}")]
    RemoteRequest { status: StatusCode, body: String },

    /// A success status carried a body that was not valid JSON.
    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The call never produced a response.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("base URL cannot be a base: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not serialize query parameters: {0}")]
    QuerySerialization(#[from] serde_urlencoded::ser::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The executor handed over an argument object this resolver cannot
    /// use.
    #[error("invalid field arguments: {0}")]
    InvalidArguments(String),
}
