use crate::util::classify::is_class_instance;
use crate::value::Value;

/// Deep-clones a tree made of scalars, sequences and mappings.
///
/// Sequences and mappings are rebuilt node by node. Opaque handles are returned as the same
/// shared instance, since their internals are not ours to copy.
pub fn simple_deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(simple_deep_clone).collect()),
        _ if is_class_instance(value) => value.clone(),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, entry)| (key.clone(), simple_deep_clone(entry)))
                .collect(),
        ),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Opaque(_) => value.clone(),
    }
}
