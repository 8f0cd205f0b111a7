use serde_json::{Value, json};

use crate::store::path_ops::{navigate_path, remove_value_at_path, set_value_at_path};

fn segments(path: &str) -> Vec<String> {
    path.split('.').map(str::to_string).collect()
}

#[test]
fn navigate_reads_nested_values() {
    let tree = json!({ "app": { "config": { "theme": "dark" } } });

    assert_eq!(
        navigate_path(&tree, &segments("app.config.theme")),
        Some(&json!("dark"))
    );
    assert_eq!(
        navigate_path(&tree, &segments("app.config")),
        Some(&json!({ "theme": "dark" }))
    );
}

#[test]
fn navigate_stops_at_missing_or_scalar_nodes() {
    let tree = json!({ "app": { "count": 3, "list": [1, 2, 3] } });

    assert_eq!(navigate_path(&tree, &segments("missing")), None);
    assert_eq!(navigate_path(&tree, &segments("app.count.deeper")), None);
    assert_eq!(navigate_path(&tree, &segments("app.list.0")), None);
}

#[test]
fn set_creates_intermediate_mappings() {
    let mut tree = json!({});

    let previous = set_value_at_path(&mut tree, &segments("a.b.c"), json!(1));

    assert_eq!(previous, None);
    assert_eq!(tree, json!({ "a": { "b": { "c": 1 } } }));
}

#[test]
fn set_returns_previous_value() {
    let mut tree = json!({ "counter": 0 });

    let previous = set_value_at_path(&mut tree, &segments("counter"), json!(42));

    assert_eq!(previous, Some(json!(0)));
    assert_eq!(tree, json!({ "counter": 42 }));
}

#[test]
fn set_replaces_scalar_intermediate() {
    let mut tree = json!({ "a": 5 });

    set_value_at_path(&mut tree, &segments("a.b"), json!("x"));

    assert_eq!(tree, json!({ "a": { "b": "x" } }));
}

#[test]
fn set_replaces_sequence_intermediate() {
    let mut tree = json!({ "a": [1, 2] });

    set_value_at_path(&mut tree, &segments("a.0"), json!(true));

    assert_eq!(tree, json!({ "a": { "0": true } }));
}

#[test]
fn set_on_non_object_root_replaces_it() {
    let mut tree = Value::Null;

    set_value_at_path(&mut tree, &segments("x"), json!(1));

    assert_eq!(tree, json!({ "x": 1 }));
}

#[test]
fn set_replaces_every_non_mapping_on_the_way() {
    let mut tree = json!({ "a": { "b": "text" } });

    let previous = set_value_at_path(&mut tree, &segments("a.b.c.d"), json!(null));

    assert_eq!(previous, None);
    assert_eq!(tree, json!({ "a": { "b": { "c": { "d": null } } } }));
}

#[test]
fn set_with_no_segments_stores_nothing() {
    let mut tree = json!({ "a": 1 });

    assert_eq!(set_value_at_path(&mut tree, &[], json!(2)), None);
    assert_eq!(tree, json!({ "a": 1 }));
}

#[test]
fn set_keeps_siblings() {
    let mut tree = json!({ "app": { "config": { "theme": "dark", "language": "fr" } } });

    set_value_at_path(&mut tree, &segments("app.config.theme"), json!("light"));

    assert_eq!(
        tree,
        json!({ "app": { "config": { "theme": "light", "language": "fr" } } })
    );
}

#[test]
fn remove_deletes_only_the_leaf() {
    let mut tree = json!({ "app": { "a": 1, "b": 2 } });

    let removed = remove_value_at_path(&mut tree, &segments("app.a"));

    assert_eq!(removed, Some(json!(1)));
    assert_eq!(tree, json!({ "app": { "b": 2 } }));
}

#[test]
fn remove_missing_path_changes_nothing() {
    let mut tree = json!({ "app": { "a": 1 } });

    assert_eq!(remove_value_at_path(&mut tree, &segments("app.z")), None);
    assert_eq!(remove_value_at_path(&mut tree, &segments("nope.z")), None);
    assert_eq!(remove_value_at_path(&mut tree, &segments("app.a.z")), None);
    assert_eq!(tree, json!({ "app": { "a": 1 } }));
}
