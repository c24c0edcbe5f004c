use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MergeResult;
use crate::merge::api::merge_in_place;
use crate::merge::settings::MergeOptions;
use crate::value::Value;

/// Merges a partial override into a typed configuration value.
///
/// `target` is captured as a [`Value`] tree, merged with `source` and deserialized back into `T`.
/// Fails when `T` cannot be serialized, or when the merged tree no longer fits `T` (for example an
/// override that changes a number into a string).
///
/// # Examples
///
/// ```
/// use deep_merge_rs::merge::{merge_typed, MergeOptions};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct ServerConfig {
///     host: String,
///     port: u16,
/// }
///
/// let base = ServerConfig { host: "localhost".into(), port: 80 };
/// let merged = merge_typed(&base, json!({ "port": 8080 }), MergeOptions::default()).unwrap();
/// assert_eq!(merged, ServerConfig { host: "localhost".into(), port: 8080 });
/// ```
pub fn merge_typed<T, S>(target: &T, source: S, options: MergeOptions) -> MergeResult<T>
where
    T: Serialize + DeserializeOwned,
    S: Into<Value>,
{
    let mut merged = Value::from_serializable(target)?;
    merge_in_place(&mut merged, source.into(), options);
    merged.deserialize_into()
}
