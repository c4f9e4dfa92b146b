//! Shared generators for the property tests.

use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf(with_null: bool) -> BoxedStrategy<Value> {
    let scalars = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (0i64..5).prop_map(Value::from),
        "[a-c]{0,2}".prop_map(Value::String),
    ];
    if with_null {
        prop_oneof![1 => Just(Value::Null), 6 => scalars].boxed()
    } else {
        scalars.boxed()
    }
}

/// Small JSON trees with few distinct keys and values, so generated pairs
/// share structure often enough to exercise recursion.
pub fn json_value(with_null: bool) -> BoxedStrategy<Value> {
    leaf(with_null)
        .prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-d]", inner), 0..4)
                    .prop_map(|fields| Value::Object(fields.into_iter().collect::<Map<_, _>>())),
            ]
        })
        .boxed()
}
