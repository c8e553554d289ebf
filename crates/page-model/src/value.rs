use serde_json::Value;

/// Whether a document value counts as set.
///
/// `null`, `false`, `0`, `NaN` and `""` do not; arrays and objects always do, even when empty.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::Array(_) | Value::Object(_) => true,
    }
}
