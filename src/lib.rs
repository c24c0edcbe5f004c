#![doc = include_str!("RUSTDOC.md")]

pub mod error;
pub mod merge;
pub mod util;
pub mod value;

pub use error::{MergeError, MergeErrorCode, MergeResult};
pub use merge::{merge_layers, merge_options, merge_typed, MergeOptions};
pub use util::{is_class_instance, is_object, simple_deep_clone};
pub use value::{Map, OpaqueHandle, Value};
