use serde_json::Value;

/// Recursively folds `update` into `base`.
///
/// Object values merge key by key; any other update value, arrays
/// included, replaces the original wholesale. Keys the update does not
/// mention are left as fetched, which is what lets a partial update ride
/// on top of a full-replacement PUT without clobbering server-managed
/// fields.
pub fn deep_merge(base: &mut Value, update: Value) {
    match (base, update) {
        (Value::Object(base), Value::Object(update)) => {
            for (key, value) in update {
                match base.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
