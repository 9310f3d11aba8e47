use serde_json::Value;

use crate::{
    context::OkapiContext,
    error::Error,
    fetch,
    query::{build_query, Link, ListArguments},
    shape::Skeleton,
};

/// Resolves a listing field backed by a searchable collection.
///
/// With a link in play the filter is derived from the parent record and
/// any caller-supplied CQL is ignored. A parent whose end of the link is
/// not populated resolves to null without a call, the same rule the
/// linked single-entity lookup follows.
pub async fn resolve_listing(
    ctx: &OkapiContext,
    path: &str,
    parent: Option<&Value>,
    args: &ListArguments,
    link: Option<&Link>,
    skeleton: &Skeleton,
) -> Result<Value, Error> {
    let link_filter = match link {
        Some(link) => match link.filter_for(parent.unwrap_or(&Value::Null)) {
            Some(filter) => Some(filter),
            None => return Ok(Value::Null),
        },
        None => None,
    };

    let query = build_query(args, link_filter.as_deref())?;
    let mut url = ctx.url_for(path)?;
    if !query.is_empty() {
        url.set_query(Some(&query));
    }

    let json = fetch::get_json(ctx, url).await?;

    Ok(skeleton.project(json))
}
