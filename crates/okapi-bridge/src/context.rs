use http::{HeaderMap, HeaderValue};
use url::Url;

use crate::error::Error;

/// Header naming the tenant every call is scoped to.
pub const TENANT_HEADER: &str = "x-okapi-tenant";
/// Header carrying the authentication token, when one is held.
pub const TOKEN_HEADER: &str = "x-okapi-token";

/// Connection details for one GraphQL request.
///
/// Built once by the transport layer before execution starts, then shared
/// read-only by every resolver that runs while the request executes. A
/// resolver needing a per-call header tweak clones the map and leaves
/// this one alone.
#[derive(Debug, Clone)]
pub struct OkapiContext {
    base_url: Url,
    headers: HeaderMap,
}

impl OkapiContext {
    pub fn new(mut base_url: Url, headers: HeaderMap) -> Result<Self, Error> {
        ensure_trailing_slash(&mut base_url).map_err(|()| Error::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { base_url, headers })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Resolves a module path against the base URL.
    pub fn url_for(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// Connection settings as the outer wiring deserializes them from its
/// configuration source. Turning them into a context is the only thing
/// this crate does with them.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OkapiConfig {
    pub url: Url,
    pub tenant: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl OkapiConfig {
    pub fn into_context(self) -> Result<OkapiContext, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(TENANT_HEADER, HeaderValue::from_str(&self.tenant)?);

        if let Some(token) = &self.token {
            headers.insert(TOKEN_HEADER, HeaderValue::from_str(token)?);
        }

        OkapiContext::new(self.url, headers)
    }
}

// Url::join drops the last path segment of a base without a trailing
// slash, which would silently eat a gateway path prefix.
fn ensure_trailing_slash(url: &mut Url) -> Result<(), ()> {
    let mut segments = url.path_segments_mut()?;

    segments.pop_if_empty();
    segments.push("");

    Ok(())
}
