use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeErrorCode {
    OpaqueValue,
    InvalidJson,
    Serialize,
    Deserialize,
}

impl MergeErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeErrorCode::OpaqueValue => "deep-merge/opaque-value",
            MergeErrorCode::InvalidJson => "deep-merge/invalid-json",
            MergeErrorCode::Serialize => "deep-merge/serialize",
            MergeErrorCode::Deserialize => "deep-merge/deserialize",
        }
    }
}

/// Error raised at the JSON/serde boundary of the value model.
///
/// Cloning and merging never fail; only conversions between [`Value`](crate::value::Value)
/// and external representations produce this error.
#[derive(Clone, Debug)]
pub struct MergeError {
    pub code: MergeErrorCode,
    message: String,
}

impl MergeError {
    pub fn new(code: MergeErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MergeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for MergeError {}

pub type MergeResult<T> = Result<T, MergeError>;

pub fn opaque_value(type_name: &str) -> MergeError {
    MergeError::new(
        MergeErrorCode::OpaqueValue,
        format!("Opaque value of type `{type_name}` has no JSON representation"),
    )
}

pub fn invalid_json(message: impl Into<String>) -> MergeError {
    MergeError::new(MergeErrorCode::InvalidJson, message)
}

pub fn serialize_error(message: impl Into<String>) -> MergeError {
    MergeError::new(MergeErrorCode::Serialize, message)
}

pub fn deserialize_error(message: impl Into<String>) -> MergeError {
    MergeError::new(MergeErrorCode::Deserialize, message)
}
