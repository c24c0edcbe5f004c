//! Options accepted by the merge entry points.

use serde::{Deserialize, Serialize};

/// Controls how a partial source is applied on top of a target tree.
///
/// Deserializes from the camelCase form (`{"mergeUndefined": true}`) so the options can live next
/// to the configuration they compose. Missing fields fall back to [`MergeOptions::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeOptions {
    /// When `true`, an explicit `undefined` entry in the source overwrites the target entry.
    pub merge_undefined: bool,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge_undefined(mut self, merge_undefined: bool) -> Self {
        self.merge_undefined = merge_undefined;
        self
    }

    pub fn merge_undefined(&self) -> bool {
        self.merge_undefined
    }
}
