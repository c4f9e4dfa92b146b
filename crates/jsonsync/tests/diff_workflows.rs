use jsonsync::json_patch::{from_json_patch, to_json_patch};
use jsonsync::{apply_patch, diff, optimize, DiffOptions, Op, SyncData, SyncProcessor};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

fn p(steps: &[&str]) -> Vec<String> {
    steps.iter().map(|s| s.to_string()).collect()
}

fn fields(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

// ── Differ ────────────────────────────────────────────────────────────────

#[test]
fn array_reorder_and_append() {
    let src = json!([1, 2, 3]);
    let dst = json!([1, 3, 2, 4]);
    let ops = diff(&src, &dst);
    assert_eq!(
        ops,
        vec![
            Op::Add { path: p(&["1"]), value: json!(3) },
            Op::Add { path: p(&["3"]), value: json!(4) },
            Op::Remove { path: p(&["4"]) },
        ]
    );
    assert_eq!(apply_patch(src, &ops).unwrap(), dst);
}

#[test]
fn added_subtree_is_one_op_and_optimizer_keeps_it() {
    let src = json!({"a": {"x": 1}});
    let dst = json!({"a": {"x": 1}, "b": {"y": 2}});
    let ops = diff(&src, &dst);
    assert_eq!(ops, vec![Op::Add { path: p(&["b"]), value: json!({"y": 2}) }]);
    assert_eq!(optimize(&dst, ops.clone()).unwrap(), ops);
}

#[test]
fn escaped_keys_survive_the_wire() {
    let src = json!({"a/b": 1, "m~n": [1]});
    let dst = json!({"a/b": 2, "m~n": [1, 2]});
    let wire = to_json_patch(&diff(&src, &dst));
    assert_eq!(
        wire,
        json!([
            {"op": "replace", "path": "/a~1b", "value": 2},
            {"op": "add", "path": "/m~0n/1", "value": 2}
        ])
    );
    let ops = from_json_patch(&wire).unwrap();
    assert_eq!(apply_patch(src, &ops).unwrap(), dst);
}

// ── Optimizer ─────────────────────────────────────────────────────────────

#[test]
fn sibling_changes_fold_into_root_merge() {
    let src = json!({"a": 1, "b": 2});
    let dst = json!({"a": 1, "b": 3, "c": 4});
    let ops = optimize(&dst, diff(&src, &dst)).unwrap();
    assert_eq!(ops, vec![Op::Merge { path: vec![], value: fields(json!({"b": 3, "c": 4})) }]);
    assert_eq!(
        to_json_patch(&ops),
        json!([{"op": "merge", "path": "", "value": {"b": 3, "c": 4}}])
    );
    assert_eq!(apply_patch(src, &ops).unwrap(), dst);
}

#[test]
fn profile_update_collapses_to_one_merge() {
    let src = json!({
        "id": 7,
        "name": {"first": "Ann", "last": "Lee"},
        "address": {"city": "Oslo", "zip": "0150", "geo": {"lat": 59.9, "lng": 10.7}},
        "tags": ["a", "b"]
    });
    let dst = json!({
        "id": 7,
        "name": {"first": "Anna", "last": "Lie"},
        "address": {"city": "Bergen", "zip": "5003", "geo": {"lat": 60.4, "lng": 5.3}},
        "tags": ["a", "b"]
    });
    let elementary = diff(&src, &dst);
    assert_eq!(elementary.len(), 6);

    let ops = optimize(&dst, elementary).unwrap();
    assert_eq!(
        ops,
        vec![Op::Merge {
            path: vec![],
            value: fields(json!({
                "name": {"first": "Anna", "last": "Lie"},
                "address": {"city": "Bergen", "zip": "5003", "geo": {"lat": 60.4, "lng": 5.3}}
            })),
        }]
    );
    assert_eq!(apply_patch(src, &ops).unwrap(), dst);
}

#[test]
fn array_elements_keep_their_own_merges() {
    let src = json!({"rows": [{"a": 1, "b": 1}, {"c": 1}], "n": 1});
    let dst = json!({"rows": [{"a": 2, "b": 2}, {"c": 1}, 5], "n": 1});
    let ops = optimize(&dst, diff(&src, &dst)).unwrap();
    assert_eq!(
        ops,
        vec![
            Op::Add { path: p(&["rows", "2"]), value: json!(5) },
            Op::Merge { path: p(&["rows", "0"]), value: fields(json!({"a": 2, "b": 2})) },
        ]
    );
    assert_eq!(apply_patch(src, &ops).unwrap(), dst);
}

// ── Sync ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Settings {
    theme: String,
    font_size: u32,
    plugins: Vec<String>,
}

#[test]
fn typed_sync_over_the_wire() {
    let sync = SyncProcessor::new(DiffOptions { optimize: true });
    let before = Settings { theme: "light".into(), font_size: 12, plugins: vec!["git".into()] };
    let after = Settings {
        theme: "dark".into(),
        font_size: 14,
        plugins: vec!["git".into(), "lsp".into()],
    };
    let source = serde_json::to_value(&before).unwrap();
    let target = serde_json::to_value(&after).unwrap();

    let data = sync.client_sync(2, &source, &target).unwrap();
    let received = SyncData::from_json(&data.to_json()).unwrap();
    assert_eq!(received, data);

    let doc = sync.server_sync(source, &received).unwrap();
    let settings: Settings = serde_json::from_value(doc).unwrap();
    assert_eq!(settings, after);

    let ops = sync.diff_objects(&before, &after).unwrap();
    assert_eq!(sync.apply_to_object(&before, &ops).unwrap(), after);
}
