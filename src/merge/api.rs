use crate::merge::settings::MergeOptions;
use crate::util::{is_falsy, is_plain_object, simple_deep_clone};
use crate::value::Value;

/// Deep merges `source` into a copy of `target` and returns the copy.
///
/// Unlike assigning into the target, the caller's tree is never touched: the result is a fresh
/// tree. Mappings are merged key by key. Sequences are treated as a single value and replaced, so
/// extending a list means building the new list explicitly. Opaque handles are moved into the
/// result as the same shared instance.
///
/// A falsy source (`undefined`, `null`, `false`, `0`, `""`) leaves the result equal to the target.
/// Explicit `undefined` entries in the source are skipped unless
/// [`MergeOptions::merge_undefined`] is set.
///
/// # Examples
///
/// ```
/// use deep_merge_rs::merge::{merge_options, MergeOptions};
/// use deep_merge_rs::value::Value;
/// use serde_json::json;
///
/// let defaults = Value::from(json!({
///     "assetOptions": { "uploadMaxFileSize": 1000, "permittedFileTypes": ["image/*"] },
///     "plugins": ["core"],
/// }));
///
/// let config = merge_options(
///     &defaults,
///     json!({
///         "assetOptions": { "uploadMaxFileSize": 5000 },
///         "plugins": ["core", "search"],
///     }),
///     MergeOptions::default(),
/// );
///
/// assert_eq!(config["assetOptions"]["uploadMaxFileSize"], Value::from(5000));
/// assert_eq!(config["assetOptions"]["permittedFileTypes"], Value::from(json!(["image/*"])));
/// assert_eq!(config["plugins"], Value::from(json!(["core", "search"])));
/// assert_eq!(defaults["assetOptions"]["uploadMaxFileSize"], Value::from(1000));
/// ```
pub fn merge_options<S>(target: &Value, source: S, options: MergeOptions) -> Value
where
    S: Into<Value>,
{
    let source = source.into();
    let mut merged = simple_deep_clone(target);
    if is_falsy(&source) {
        log::debug!(
            "merge source is a falsy {}; returning a copy of the target",
            source.type_name()
        );
        return merged;
    }
    merge_in_place(&mut merged, source, options);
    merged
}

/// Applies several partial sources in order, later layers winning.
///
/// Equivalent to folding [`merge_options`] over `layers` but clones the target only once.
pub fn merge_layers<I>(target: &Value, layers: I, options: MergeOptions) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let mut merged = simple_deep_clone(target);
    for layer in layers {
        merge_in_place(&mut merged, layer.into(), options);
    }
    merged
}

/// Recursive step. `target` must already be owned by the caller's result tree.
pub(super) fn merge_in_place(target: &mut Value, source: Value, options: MergeOptions) {
    if is_falsy(&source) {
        return;
    }
    // Anything but mapping-over-mapping is resolved by the parent's key assignment.
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, entry) in source_map {
        if is_plain_object(&entry) {
            let slot = target_map.entry(key).or_default();
            if !is_plain_object(slot) {
                log::trace!(
                    "replacing {} entry with an empty mapping before merging",
                    slot.type_name()
                );
                *slot = Value::object();
            }
            merge_in_place(slot, entry, options);
        } else if need_merge(&entry, options) {
            // Opaque handles, sequences and scalars replace the entry as a whole.
            target_map.insert(key, entry);
        }
    }
}

fn need_merge(value: &Value, options: MergeOptions) -> bool {
    !(value.is_undefined() && !options.merge_undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OpaqueHandle;
    use serde_json::json;

    fn merge(target: serde_json::Value, source: serde_json::Value) -> Value {
        merge_options(&Value::from(target), source, MergeOptions::default())
    }

    #[test]
    fn nested_objects_merge_key_by_key() {
        let merged = merge(json!({"x": {"a": 1, "b": 2}}), json!({"x": {"b": 3}}));
        assert_eq!(merged, Value::from(json!({"x": {"a": 1, "b": 3}})));
    }

    #[test]
    fn new_keys_are_added() {
        let merged = merge(json!({"a": 1}), json!({"b": {"c": [1]}}));
        assert_eq!(merged, Value::from(json!({"a": 1, "b": {"c": [1]}})));
    }

    #[test]
    fn scalar_target_entry_becomes_mapping() {
        let merged = merge(json!({"flag": true}), json!({"flag": {"nested": 1}}));
        assert_eq!(merged, Value::from(json!({"flag": {"nested": 1}})));
    }

    #[test]
    fn sequence_target_entry_becomes_mapping() {
        let merged = merge(json!({"list": [1, 2]}), json!({"list": {"0": "x"}}));
        assert_eq!(merged, Value::from(json!({"list": {"0": "x"}})));
    }

    #[test]
    fn empty_mapping_source_resets_non_mapping_entry() {
        let merged = merge(json!({"a": 5, "b": {"c": 1}}), json!({"a": {}, "b": {}}));
        assert_eq!(merged, Value::from(json!({"a": {}, "b": {"c": 1}})));
    }

    #[test]
    fn sequences_are_replaced_wholesale() {
        let merged = merge(
            json!({"list": [1, 2, 3], "nested": {"tags": ["a"]}}),
            json!({"list": [9], "nested": {"tags": []}}),
        );
        assert_eq!(merged["list"], Value::from(json!([9])));
        assert_eq!(merged["nested"]["tags"], Value::from(json!([])));
    }

    #[test]
    fn mapping_target_entry_replaced_by_scalar_or_sequence() {
        let merged = merge(
            json!({"a": {"deep": 1}, "b": {"deep": 2}}),
            json!({"a": "flat", "b": [1]}),
        );
        assert_eq!(merged, Value::from(json!({"a": "flat", "b": [1]})));
    }

    #[test]
    fn null_source_entry_overwrites() {
        let merged = merge(json!({"a": {"b": 1}}), json!({"a": null}));
        assert_eq!(merged, Value::from(json!({"a": null})));
    }

    #[test]
    fn falsy_sources_are_ignored() {
        let target = Value::from(json!({"a": 1}));
        for source in [
            Value::from(0),
            Value::Null,
            Value::Undefined,
            Value::from(false),
            Value::from(""),
        ] {
            let merged = merge_options(&target, source, MergeOptions::default());
            assert_eq!(merged, target);
        }
    }

    #[test]
    fn falsy_entries_still_overwrite() {
        let merged = merge(
            json!({"count": 5, "name": "n", "enabled": true}),
            json!({"count": 0, "name": "", "enabled": false}),
        );
        assert_eq!(
            merged,
            Value::from(json!({"count": 0, "name": "", "enabled": false}))
        );
    }

    #[test]
    fn undefined_entries_are_gated() {
        let target = Value::from(json!({"a": 1}));
        let source: Value = [("a", Value::Undefined)].into_iter().collect();

        let skipped = merge_options(&target, source.clone(), MergeOptions::default());
        assert_eq!(skipped, target);

        let written = merge_options(
            &target,
            source,
            MergeOptions::default().with_merge_undefined(true),
        );
        assert!(written["a"].is_undefined());
        assert!(written.get("a").is_some());
    }

    #[test]
    fn nested_undefined_entries_are_gated() {
        let target = Value::from(json!({"x": {"a": 1, "b": 2}}));
        let source: Value = [(
            "x",
            [("a", Value::Undefined), ("b", Value::from(3))]
                .into_iter()
                .collect::<Value>(),
        )]
        .into_iter()
        .collect();
        let merged = merge_options(&target, source, MergeOptions::default());
        assert_eq!(merged, Value::from(json!({"x": {"a": 1, "b": 3}})));
    }

    #[test]
    fn opaque_entries_are_assigned_as_is() {
        let handle = OpaqueHandle::new(String::from("plugin"));
        let target = Value::from(json!({"plugin": {"name": "old"}, "other": 1}));
        let source: Value = [("plugin", handle.clone())].into_iter().collect();

        let merged = merge_options(&target, source, MergeOptions::default());
        assert!(merged["plugin"].as_opaque().unwrap().ptr_eq(&handle));
        assert_eq!(merged["other"], Value::from(1));
    }

    #[test]
    fn mapping_over_opaque_entry_replaces_it() {
        let handle = OpaqueHandle::new(7u32);
        let target: Value = [("slot", handle)].into_iter().collect();
        let merged = merge_options(&target, json!({"slot": {"a": 1}}), MergeOptions::default());
        assert_eq!(merged, Value::from(json!({"slot": {"a": 1}})));
    }

    #[test]
    fn non_mapping_roots_are_not_merged() {
        let merged = merge(json!([1, 2]), json!([3]));
        assert_eq!(merged, Value::from(json!([1, 2])));

        let merged = merge(json!({"a": 1}), json!(["b"]));
        assert_eq!(merged, Value::from(json!({"a": 1})));

        let merged = merge(json!("text"), json!({"a": 1}));
        assert_eq!(merged, Value::from("text"));

        let opaque: Value = OpaqueHandle::new(1u8).into();
        let merged = merge_options(&Value::from(json!({"a": 1})), opaque, MergeOptions::default());
        assert_eq!(merged, Value::from(json!({"a": 1})));
    }

    #[test]
    fn undefined_target_stays_undefined() {
        let merged = merge_options(&Value::Undefined, json!({"a": 1}), MergeOptions::default());
        assert!(merged.is_undefined());
    }

    #[test]
    fn target_is_left_untouched() {
        let target = Value::from(json!({"x": {"a": 1, "list": [1, 2]}, "y": true}));
        let snapshot = target.clone();
        let merged = merge_options(
            &target,
            json!({"x": {"a": 2, "list": [3]}, "y": {"z": 1}}),
            MergeOptions::default(),
        );
        assert_eq!(target, snapshot);
        assert_ne!(merged, snapshot);
    }

    #[test]
    fn layers_apply_in_order() {
        let base = Value::from(json!({"server": {"host": "localhost", "port": 80}, "debug": false}));
        let merged = merge_layers(
            &base,
            [
                json!({"server": {"port": 8080}}),
                json!(null),
                json!({"server": {"host": "0.0.0.0"}, "debug": true}),
            ],
            MergeOptions::default(),
        );
        assert_eq!(
            merged,
            Value::from(json!({"server": {"host": "0.0.0.0", "port": 8080}, "debug": true}))
        );
    }

    #[test]
    fn layers_match_repeated_merges() {
        let base = Value::from(json!({"a": {"b": 1}, "c": [1]}));
        let first = json!({"a": {"d": 2}});
        let second = json!({"c": [2], "a": {"b": 3}});

        let layered = merge_layers(&base, [first.clone(), second.clone()], MergeOptions::default());
        let folded = merge_options(
            &merge_options(&base, first, MergeOptions::default()),
            second,
            MergeOptions::default(),
        );
        assert_eq!(layered, folded);
    }
}
