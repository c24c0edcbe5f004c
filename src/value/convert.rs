use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::{Error as _, SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Map, OpaqueHandle, Value};
use crate::error::{deserialize_error, opaque_value, serialize_error, MergeResult};

impl Value {
    /// Converts the tree to JSON following `JSON.stringify` rules.
    ///
    /// `Undefined` entries are dropped from mappings, become `null` inside sequences and at the
    /// root. Opaque handles have no JSON form and produce an error.
    pub fn to_json(&self) -> MergeResult<serde_json::Value> {
        Ok(match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Number(number) => serde_json::Value::Number(number.clone()),
            Value::String(text) => serde_json::Value::String(text.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<MergeResult<Vec<_>>>()?,
            ),
            Value::Object(map) => {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    if value.is_undefined() {
                        continue;
                    }
                    object.insert(key.clone(), value.to_json()?);
                }
                serde_json::Value::Object(object)
            }
            Value::Opaque(handle) => return Err(opaque_value(handle.type_name())),
        })
    }

    /// Captures any serializable value (typically a configuration struct) as a tree.
    pub fn from_serializable<T>(value: &T) -> MergeResult<Self>
    where
        T: ?Sized + Serialize,
    {
        serde_json::to_value(value)
            .map(Value::from)
            .map_err(|err| serialize_error(err.to_string()))
    }

    /// Rebuilds a typed value from the tree.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> MergeResult<T> {
        let json = self.to_json()?;
        serde_json::from_value(json).map_err(|err| deserialize_error(err.to_string()))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Number(number) => number.serialize(serializer),
            Value::String(text) => serializer.serialize_str(text),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let defined = map.iter().filter(|(_, value)| !value.is_undefined());
                let mut out = serializer.serialize_map(None)?;
                for (key, value) in defined {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Opaque(handle) => Err(S::Error::custom(opaque_value(handle.type_name()))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => Value::Number(number),
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(value as f64)
    }
}

impl From<f64> for Value {
    /// Non-finite numbers have no JSON form and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<OpaqueHandle> for Value {
    fn from(value: OpaqueHandle) -> Self {
        Value::Opaque(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
