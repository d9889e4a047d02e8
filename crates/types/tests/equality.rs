//! Property-based tests for `PropertyValue`/`PropertyBag` deep equality.
//!
//! The diff engine's update/noop classification rests entirely on
//! `PartialEq` for property bags behaving like a real equivalence
//! relation; these tests hold it to that regardless of how deeply the
//! generated values nest.

use drift_types::{Moniker, PropertyBag, PropertyValue};
use proptest::prelude::*;

fn arb_property_value() -> impl Strategy<Value = PropertyValue> {
    let leaf = prop_oneof![
        Just(PropertyValue::Null),
        any::<bool>().prop_map(PropertyValue::Bool),
        any::<i16>().prop_map(|n| PropertyValue::Number(f64::from(n))),
        "[a-z]{0,8}".prop_map(PropertyValue::String),
        "[a-z]{1,6}".prop_map(|m| PropertyValue::Reference(Moniker::new(m))),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(PropertyValue::Sequence),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| PropertyValue::Bag(map.into_iter().collect())),
        ]
    })
}

fn arb_property_bag() -> impl Strategy<Value = PropertyBag> {
    proptest::collection::btree_map("[a-z]{1,6}", arb_property_value(), 0..5)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn equality_is_reflexive(bag in arb_property_bag()) {
        prop_assert_eq!(bag.clone(), bag);
    }

    #[test]
    fn equality_is_symmetric(a in arb_property_bag(), b in arb_property_bag()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equality_is_transitive(a in arb_property_bag(), b in arb_property_bag(), c in arb_property_bag()) {
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }

    #[test]
    fn references_are_stable_under_equal_bags(bag in arb_property_bag()) {
        let clone = bag.clone();
        prop_assert_eq!(bag.references(), clone.references());
    }
}
