//! JSON Patch diff: generate the elementary operations that turn one
//! document into another.
//!
//! Objects are compared field by field. Arrays are aligned with a *guide*:
//! the source elements whose value also occurs somewhere in the target.
//! Membership is by value, not by count, so arrays with repeated values can
//! produce longer patches than necessary; the output is still correct when
//! applied in order.

mod strategy;

pub use strategy::{DiffOptions, DiffStrategy, MergeOperationDiff, SimpleDiff};

use jsonsync_json_pointer::append;
use jsonsync_util::{clone, deep_equal};
use serde_json::{Map, Value};
use tracing::debug;

use crate::json_patch::Op;

// ── Public API ────────────────────────────────────────────────────────────

/// Generate the operations that transform `src` into `dst`.
///
/// Never fails. Values embedded in the result are deep copies of parts of
/// `dst`.
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &[], src, dst);
    debug!(ops = ops.len(), "diff complete");
    ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_at_path(ops: &mut Vec<Op>, path: &[String], src: &Value, dst: &Value) {
    if deep_equal(src, dst) {
        return;
    }
    match (src, dst) {
        (Value::Array(s), Value::Array(d)) => diff_arr(ops, path, s, d),
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d),
        _ => ops.push(Op::Replace {
            path: path.to_vec(),
            value: clone(dst),
        }),
    }
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    // Source order first: recurse into shared keys, drop the rest.
    for (key, src_val) in src {
        let p = append(path, key.as_str());
        match dst.get(key) {
            Some(dst_val) => diff_at_path(ops, &p, src_val, dst_val),
            None => ops.push(Op::Remove { path: p }),
        }
    }
    // Then target-only keys, in target order.
    for (key, dst_val) in dst {
        if !src.contains_key(key) {
            ops.push(Op::Add {
                path: append(path, key.as_str()),
                value: clone(dst_val),
            });
        }
    }
}

/// `None` means a cursor ran past its sequence and never matches anything.
fn same(a: Option<&Value>, b: Option<&Value>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if deep_equal(a, b))
}

fn diff_arr(ops: &mut Vec<Op>, path: &[String], src: &[Value], dst: &[Value]) {
    let guide: Vec<&Value> = src
        .iter()
        .filter(|s| dst.iter().any(|d| deep_equal(s, d)))
        .collect();

    // Ops apply in order, so the array being patched is always
    // `dst[..ti] ++ src[si..]` and `ti` is the position of `src[si]` in it.
    let (mut gi, mut si, mut ti) = (0usize, 0usize, 0usize);
    while si < src.len() || ti < dst.len() {
        let g = guide.get(gi).copied();
        let s = src.get(si);
        let t = dst.get(ti);
        let at = ti;
        let index = || append(path, at.to_string());

        if same(g, s) && same(g, t) {
            gi += 1;
            si += 1;
            ti += 1;
        } else if same(g, s) {
            match t {
                Some(t) => {
                    ops.push(Op::Add { path: index(), value: clone(t) });
                    ti += 1;
                }
                None => {
                    // Target exhausted: the guide over-counted a repeated value.
                    ops.push(Op::Remove { path: index() });
                    gi += 1;
                    si += 1;
                }
            }
        } else if same(g, t) {
            ops.push(Op::Remove { path: index() });
            si += 1;
        } else {
            match (s, t) {
                (Some(s), Some(t)) => {
                    diff_at_path(ops, &index(), s, t);
                    si += 1;
                    ti += 1;
                }
                (None, Some(t)) => {
                    ops.push(Op::Add { path: index(), value: clone(t) });
                    ti += 1;
                }
                (Some(_), None) => {
                    ops.push(Op::Remove { path: index() });
                    si += 1;
                }
                (None, None) => break,
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_patch::apply_patch;
    use serde_json::json;

    fn p(steps: &[&str]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    fn round_trip(src: Value, dst: Value) -> Vec<Op> {
        let ops = diff(&src, &dst);
        let result = apply_patch(src, &ops).expect("apply failed");
        assert_eq!(result, dst);
        ops
    }

    #[test]
    fn diff_equal_docs() {
        assert!(diff(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})).is_empty());
    }

    #[test]
    fn diff_ignores_key_order() {
        assert!(diff(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})).is_empty());
    }

    #[test]
    fn diff_replace_scalar_at_root() {
        assert_eq!(
            diff(&json!(1), &json!("1")),
            vec![Op::Replace { path: vec![], value: json!("1") }]
        );
    }

    #[test]
    fn diff_replace_mismatched_containers() {
        assert_eq!(
            diff(&json!({"a": [1]}), &json!({"a": {"0": 1}})),
            vec![Op::Replace { path: p(&["a"]), value: json!({"0": 1}) }]
        );
    }

    #[test]
    fn diff_object_replace_then_add() {
        let ops = round_trip(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 3, "c": 4}));
        assert_eq!(
            ops,
            vec![
                Op::Replace { path: p(&["b"]), value: json!(3) },
                Op::Add { path: p(&["c"]), value: json!(4) },
            ]
        );
    }

    #[test]
    fn diff_object_removals_in_source_order_before_additions() {
        let ops = round_trip(
            json!({"x": 1, "keep": true, "y": 2}),
            json!({"keep": true, "n": 1, "m": 2}),
        );
        assert_eq!(
            ops,
            vec![
                Op::Remove { path: p(&["x"]) },
                Op::Remove { path: p(&["y"]) },
                Op::Add { path: p(&["n"]), value: json!(1) },
                Op::Add { path: p(&["m"]), value: json!(2) },
            ]
        );
    }

    #[test]
    fn diff_nested_object() {
        let ops = round_trip(json!({"a": {"x": 1}}), json!({"a": {"x": 1}, "b": {"y": 2}}));
        assert_eq!(ops, vec![Op::Add { path: p(&["b"]), value: json!({"y": 2}) }]);
    }

    #[test]
    fn diff_array_insert_reorder_append() {
        let ops = round_trip(json!([1, 2, 3]), json!([1, 3, 2, 4]));
        assert_eq!(
            ops,
            vec![
                Op::Add { path: p(&["1"]), value: json!(3) },
                Op::Add { path: p(&["3"]), value: json!(4) },
                Op::Remove { path: p(&["4"]) },
            ]
        );
    }

    #[test]
    fn diff_array_leading_removals_use_patched_positions() {
        let ops = round_trip(json!(["a", "b", "c"]), json!(["c"]));
        assert_eq!(
            ops,
            vec![Op::Remove { path: p(&["0"]) }, Op::Remove { path: p(&["0"]) }]
        );
    }

    #[test]
    fn diff_array_positional_recursion() {
        let ops = round_trip(
            json!([{"id": 1, "v": "a"}, {"id": 2, "v": "b"}]),
            json!([{"id": 1, "v": "A"}, {"id": 2, "v": "b"}]),
        );
        assert_eq!(ops, vec![Op::Replace { path: p(&["0", "v"]), value: json!("A") }]);
    }

    #[test]
    fn diff_array_duplicates_in_source() {
        round_trip(json!([1, 1]), json!([1]));
        round_trip(json!([1, 1, 2, 1]), json!([2, 1]));
    }

    #[test]
    fn diff_array_swap() {
        round_trip(json!([2, 1]), json!([1, 2]));
        round_trip(json!(["a", "b", "c", "d"]), json!(["d", "c", "b", "a"]));
    }

    #[test]
    fn diff_array_from_and_to_empty() {
        round_trip(json!([]), json!([1, [2], {"a": 3}]));
        round_trip(json!([1, [2], {"a": 3}]), json!([]));
    }

    #[test]
    fn diff_array_longer_target_with_changes() {
        round_trip(json!([1, "x", 3]), json!([0, 1, "y", 3, 4, 5]));
    }

    #[test]
    fn diff_copies_values() {
        let mut dst = json!({"a": {"deep": [1]}});
        let ops = diff(&json!({}), &dst);
        dst["a"]["deep"][0] = json!(2);
        assert_eq!(ops, vec![Op::Add { path: p(&["a"]), value: json!({"deep": [1]}) }]);
    }

    #[test]
    fn diff_escaped_keys() {
        let ops = round_trip(json!({"a/b": 1}), json!({"a/b": 2, "c~d": 3}));
        assert_eq!(ops[0].path(), &p(&["a/b"]));
    }
}
