use http::{header, HeaderMap, HeaderValue, Method};
use serde_json::Value;

use crate::{context::OkapiContext, error::Error, fetch, merge::deep_merge};

/// Server-managed block Okapi stamps on every record; some write
/// interfaces reject it on input.
const METADATA_KEY: &str = "metadata";

/// POSTs a new record to the collection and returns the created entity
/// as the service parsed it back.
pub async fn create_record(ctx: &OkapiContext, path: &str, record: Value) -> Result<Value, Error> {
    let url = ctx.url_for(path)?;
    tracing::debug!(url = %url, "POST");

    let request = fetch::request(Method::POST, url.clone(), ctx.headers()).json(&record);

    fetch::send_and_parse(request, &url).await
}

/// Emulates partial update over full replacement.
///
/// Reads the current record, folds `update` into it, PUTs the result
/// back, and returns the merged record as held in memory; the service's
/// post-write representation is never re-fetched. With `strip_metadata`
/// the transmitted body omits the server-managed metadata block while the
/// returned record keeps it.
///
/// Nothing guards against another writer touching the record between the
/// read and the write; the last PUT wins.
pub async fn update_record(
    ctx: &OkapiContext,
    path: &str,
    id: &str,
    update: Value,
    strip_metadata: bool,
) -> Result<Value, Error> {
    let url = ctx.url_for(&format!("{path}/{id}"))?;

    let mut record = fetch::get_json(ctx, url.clone()).await?;
    deep_merge(&mut record, update);

    tracing::debug!(url = %url, "PUT");
    let request = fetch::request(Method::PUT, url.clone(), &write_headers(ctx.headers()));
    let request = if strip_metadata {
        let mut body = record.clone();
        if let Value::Object(map) = &mut body {
            map.remove(METADATA_KEY);
        }
        request.json(&body)
    } else {
        request.json(&record)
    };

    fetch::send(request, &url).await?;

    Ok(record)
}

/// DELETEs one record, answering with the identifier as confirmation.
pub async fn delete_record(ctx: &OkapiContext, path: &str, id: &str) -> Result<Value, Error> {
    let url = ctx.url_for(&format!("{path}/{id}"))?;
    tracing::debug!(url = %url, "DELETE");

    let request = fetch::request(Method::DELETE, url.clone(), &write_headers(ctx.headers()));
    fetch::send(request, &url).await?;

    Ok(Value::String(id.to_owned()))
}

/// Write responses are consumed as text, not JSON; ask for text/plain on
/// a local copy of the connection's headers.
fn write_headers(headers: &HeaderMap) -> HeaderMap {
    let mut headers = headers.clone();
    headers.insert(header::ACCEPT, HeaderValue::from_static("text/plain"));
    headers
}
