use serde_json::{Map, Value};

/// Look up `path` inside `value` the way lodash `get` does.
///
/// A key equal to the whole path wins; otherwise the path is split on `.` and `[n]`
/// segments. An empty path names the empty-string key, so it rarely matches.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => get_in(map, path),
        other => walk(other, segments(path)),
    }
}

/// [`get_path`] over a bare map such as a node's `props`.
pub fn get_in<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(direct) = map.get(path) {
        return Some(direct);
    }
    let mut parts = segments(path).into_iter();
    let first = map.get(parts.next()?)?;
    walk(first, parts)
}

fn walk<'a, 's>(value: &'a Value, parts: impl IntoIterator<Item = &'s str>) -> Option<&'a Value> {
    let mut current = value;
    for segment in parts {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Split `a.b[0].c` into `a`, `b`, `0`, `c`.
fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return vec![""];
    }
    let mut out = Vec::new();
    for part in path.split('.') {
        let mut rest = part;
        match rest.find('[') {
            Some(0) => {}
            Some(open) => {
                out.push(&rest[..open]);
                rest = &rest[open..];
            }
            None => {
                out.push(rest);
                continue;
            }
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let Some(close) = stripped.find(']') else {
                out.push(stripped);
                break;
            };
            out.push(&stripped[..close]);
            rest = &stripped[close + 1..];
        }
    }
    out
}

/// Shortest decimal form of a float; whole numbers drop the `.0` and `-0` prints as `0`.
fn number_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    f.to_string()
}

/// Text form of a resolved value as it appears inside a template.
///
/// Strings are inserted raw, scalars use their literal form, and arrays or objects are
/// written as compact JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => number_text(f),
            _ => n.to_string(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
