use crate::error::{invalid_json, MergeResult};
use crate::value::Value;

/// Parses JSON text into a value tree.
pub fn json_eval(input: &str) -> MergeResult<Value> {
    serde_json::from_str::<serde_json::Value>(input)
        .map(Value::from)
        .map_err(|err| invalid_json(err.to_string()))
}

/// Renders a value tree as compact JSON text.
pub fn stringify(value: &Value) -> MergeResult<String> {
    let json = value.to_json()?;
    Ok(json.to_string())
}
