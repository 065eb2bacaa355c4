//! Round-trip stability: decode → encode → decode reproduces the same
//! wrapped payload for arbitrary JSON trees.

use json_dyn::DynValue;
use proptest::prelude::*;
use serde_json::{Number, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e9..1.0e9f64).prop_map(|f| Value::Number(Number::from_f64(f).expect("finite"))),
        "[ -~]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn decode_encode_decode_is_stable(tree in arb_json()) {
        let first = DynValue::from(tree.clone());
        let encoded = first.to_vec().unwrap();
        let second = DynValue::from_slice(&encoded).unwrap();
        prop_assert_eq!(&second, &first);
        prop_assert_eq!(second.to_value(), Some(tree));
    }

    #[test]
    fn encoding_is_deterministic(tree in arb_json()) {
        let wrapped = DynValue::from(tree);
        prop_assert_eq!(wrapped.to_vec().unwrap(), wrapped.to_vec().unwrap());
    }
}
