use crate::value::Value;

/// Object check: mappings and opaque handles, never sequences or scalars.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Opaque(_))
}

pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` for objects that carry their own identity and must not be copied or merged.
///
/// Mappings never qualify, including ones assembled without any prototype-like origin: they have
/// no identity to preserve and stay mergeable.
pub fn is_class_instance(value: &Value) -> bool {
    is_object(value) && matches!(value, Value::Opaque(_))
}

/// Object that the merge may descend into.
pub fn is_plain_object(value: &Value) -> bool {
    is_object(value) && !is_class_instance(value)
}

/// Boolean-context falsiness: `undefined`, `null`, `false`, zero and the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Opaque(_) => false,
    }
}

pub fn is_truthy(value: &Value) -> bool {
    !is_falsy(value)
}
