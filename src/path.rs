use serde_json::Value;

/// Look up a dot-addressable path inside a candidate value.
///
/// Path segments traverse object keys; a segment that parses as an index
/// traverses into arrays. `None` means the path is absent from the candidate,
/// while `Some(Value::Null)` means it is present and explicitly null. The
/// two are distinct, and operator evaluation treats them differently.
///
/// Lookup never fails: a null or scalar candidate simply has every path
/// absent.
pub fn lookup_path<'a>(candidate: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = candidate;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }

    Some(current)
}
