pub mod classify;
pub mod deep_copy;
pub mod json;

pub use classify::{is_class_instance, is_falsy, is_object, is_plain_object, is_sequence, is_truthy};
pub use deep_copy::simple_deep_clone;
pub use json::{json_eval, stringify};
