use serde_json::Value;

use crate::error::Error;

/// Caller-supplied arguments of a listing field.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ListArguments {
    /// Opaque CQL filter, passed through to the module untouched. A
    /// malformed expression surfaces as a REST-side error, not here.
    pub cql: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Derives a listing filter from the parent record, for one-to-many
/// relations: `to_field=="<parent[from_field]>"`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub from_field: String,
    pub to_field: String,
}

impl Link {
    pub fn new(from_field: impl Into<String>, to_field: impl Into<String>) -> Self {
        Self {
            from_field: from_field.into(),
            to_field: to_field.into(),
        }
    }

    /// The filter this link produces for `parent`, or `None` when the
    /// parent's end of the relation is not populated.
    pub fn filter_for(&self, parent: &Value) -> Option<String> {
        let value = identifier(parent.get(self.from_field.as_str()))?;

        Some(format!(r#"{}=="{}""#, self.to_field, value))
    }
}

/// A populated identifier value, rendered for interpolation. Missing,
/// null and empty-string values all count as absent.
pub(crate) fn identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[derive(serde::Serialize)]
struct QueryPairs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
}

/// Builds the query-string suffix of a listing call. A link-derived
/// filter always wins over caller CQL; zero offsets and limits are
/// dropped rather than sent. Empty output means no parameter applied and
/// the caller leaves the `?` off entirely.
pub fn build_query(args: &ListArguments, link_filter: Option<&str>) -> Result<String, Error> {
    let query = link_filter.or_else(|| args.cql.as_deref().filter(|cql| !cql.is_empty()));

    let pairs = QueryPairs {
        query,
        offset: args.offset.filter(|offset| *offset != 0),
        limit: args.limit.filter(|limit| *limit != 0),
    };

    Ok(serde_urlencoded::to_string(pairs)?)
}
