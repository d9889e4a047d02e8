//! `diff(s, s)` must be empty for any snapshot `s` — §8 invariant 4 and 6.

use drift_diff::diff;
use drift_types::{PropertyBag, PropertyValue, Resource, ResourceType, Snapshot};
use proptest::prelude::*;

fn arb_property_value() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        Just(PropertyValue::Null),
        any::<bool>().prop_map(PropertyValue::Bool),
        any::<i16>().prop_map(|n| PropertyValue::Number(f64::from(n))),
        "[a-z]{0,8}".prop_map(PropertyValue::String),
    ]
}

fn arb_resource() -> impl Strategy<Value = Resource> {
    (
        "[a-z]{1,8}",
        "(pkg|other)\\.[A-Z][a-z]+",
        proptest::option::of("[a-f0-9]{8}"),
        proptest::collection::btree_map("[a-z]{1,6}", arb_property_value(), 0..4),
    )
        .prop_map(|(moniker, ty, id, props): (String, String, Option<String>, _)| {
            let bag: PropertyBag = props.into_iter().collect();
            match id {
                Some(id) => Resource::materialized(moniker, ResourceType::new(ty), id, bag),
                None => Resource::desired(moniker, ResourceType::new(ty), bag),
            }
        })
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    proptest::collection::vec(arb_resource(), 0..6).prop_map(|resources| {
        // Dedup by moniker: the model requires uniqueness within a snapshot.
        let mut seen = std::collections::HashSet::new();
        let deduped: Vec<Resource> = resources
            .into_iter()
            .filter(|r| seen.insert(r.moniker().clone()))
            .collect();
        Snapshot::new(deduped)
    })
}

proptest! {
    #[test]
    fn diffing_a_snapshot_against_itself_is_empty(snapshot in arb_snapshot()) {
        let result = diff(&snapshot, &snapshot).expect("a snapshot always agrees with itself on type");
        prop_assert!(result.changes.is_empty());
    }

    #[test]
    fn diffing_a_snapshot_against_its_clone_is_empty(snapshot in arb_snapshot()) {
        let clone = snapshot.clone();
        let result = diff(&snapshot, &clone).expect("clones agree on type");
        prop_assert!(result.changes.is_empty());
    }
}
