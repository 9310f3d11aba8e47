use indexmap::IndexMap;
use serde_json::Value;

/// Declares how a field's return value is carved out of a REST payload.
///
/// Okapi listing endpoints answer with an envelope (`{"users": [...],
/// "totalRecords": 42}`); a skeleton names the parts of that envelope the
/// GraphQL field actually returns. It is fixed per field at definition
/// time, never computed from a response.
///
/// The serialized form mirrors the two shapes definitions are written in:
/// a bare string naming one property, or an object of output key to
/// source key.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Skeleton {
    /// Return a single named property of the payload.
    SingleKey(String),
    /// Build an object from named properties, output key to source key.
    FieldMap(IndexMap<String, String>),
}

impl Skeleton {
    pub fn key(name: impl Into<String>) -> Self {
        Skeleton::SingleKey(name.into())
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Skeleton::FieldMap(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Projects a parsed payload onto the declared shape.
    ///
    /// A missing source property comes out as JSON null; absence is not
    /// an error at this layer. Properties the skeleton does not name are
    /// dropped. Nested values pass through untouched; decomposing them
    /// further is the GraphQL layer's job.
    pub fn project(&self, json: Value) -> Value {
        match self {
            Skeleton::SingleKey(key) => match json {
                Value::Object(mut payload) => payload.remove(key).unwrap_or(Value::Null),
                _ => Value::Null,
            },
            // A field map always yields exactly the declared keys, even
            // over a payload that turned out not to be an object.
            Skeleton::FieldMap(fields) => {
                let payload = match json {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Value::Object(
                    fields
                        .iter()
                        .map(|(output, source)| {
                            (output.clone(), payload.get(source).cloned().unwrap_or(Value::Null))
                        })
                        .collect(),
                )
            }
        }
    }
}
