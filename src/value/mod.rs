//! Dynamic value model shared by the clone and merge helpers.
//!
//! A configuration tree is a [`Value`]: scalars, ordered sequences, string-keyed mappings and
//! [`OpaqueHandle`]s. The variant decides how a node is treated: mappings are merged key by key,
//! sequences and opaque handles are replaced as a whole.

mod convert;
mod opaque;

use std::collections::BTreeMap;
use std::ops::Index;

use serde_json::Number;

pub use opaque::OpaqueHandle;

/// String-keyed mapping used for [`Value::Object`].
pub type Map = BTreeMap<String, Value>;

static UNDEFINED: Value = Value::Undefined;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent value. Also used for holes in sequences and explicit `undefined` entries.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Opaque(OpaqueHandle),
}

impl Value {
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&OpaqueHandle> {
        match self {
            Value::Opaque(handle) => Some(handle),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping. Returns `None` for missing keys and for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Inserts `key` into a mapping, returning the previous entry.
    ///
    /// Non-mapping values are left untouched and hand `value` back as `Err`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>, Value> {
        match self {
            Value::Object(map) => Ok(map.insert(key.into(), value.into())),
            _ => Err(value.into()),
        }
    }

    /// Name of the variant as it would be reported by a `typeof`-style check.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing keys, and keys on non-mappings, read as [`Value::Undefined`].
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.as_array()
            .and_then(|items| items.get(index))
            .unwrap_or(&UNDEFINED)
    }
}
