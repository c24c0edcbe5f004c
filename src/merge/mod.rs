//! Deep merge of partial sources into configuration trees.
//!
//! Mappings merge recursively, while sequences and opaque handles are replaced as a whole. The
//! target is borrowed and never written to; every entry point returns a new tree.
mod api;
pub mod settings;
mod typed;

pub use api::{merge_layers, merge_options};
pub use settings::MergeOptions;
pub use typed::merge_typed;
