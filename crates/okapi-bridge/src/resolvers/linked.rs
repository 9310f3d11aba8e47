use serde_json::Value;

use crate::{context::OkapiContext, error::Error, fetch, query};

/// Resolves an optional one-to-one relation by identifier lookup.
///
/// A parent without the identifier resolves to null and no call is made;
/// that is the normal shape of an optional relation, not a failure. A
/// populated identifier the service does not know still surfaces as an
/// error on this field.
pub async fn resolve_linked(
    ctx: &OkapiContext,
    parent: &Value,
    id_field: &str,
    path: &str,
) -> Result<Value, Error> {
    match query::identifier(parent.get(id_field)) {
        Some(id) => fetch_record(ctx, path, &id).await,
        None => Ok(Value::Null),
    }
}

/// Fetches one record at `<path>/<id>`. Single-record endpoints answer
/// with the entity unwrapped, so no skeleton applies.
pub async fn fetch_record(ctx: &OkapiContext, path: &str, id: &str) -> Result<Value, Error> {
    let url = ctx.url_for(&format!("{path}/{id}"))?;

    fetch::get_json(ctx, url).await
}
