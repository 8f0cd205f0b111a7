use serde_json::{Map, Value};

/// Navigates through a JSON value following path segments, without side effects
///
/// # Arguments
/// * `value` - The root value to navigate from
/// * `segments` - Path segments, root first
///
/// Returns `None` as soon as a segment is missing or the current node is not a
/// mapping.
pub(super) fn navigate_path<'a>(value: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut current = value;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Stores a value at the given segments, creating intermediate mappings as needed
///
/// Any node on the way that is missing or is not a mapping is replaced by an
/// empty mapping. Returns the value previously stored at the final segment.
///
/// # Arguments
/// * `root` - The root value to modify
/// * `segments` - Path segments, root first; an empty slice stores nothing
/// * `new_value` - The value to insert at the path
pub(super) fn set_value_at_path(
    root: &mut Value,
    segments: &[String],
    new_value: Value,
) -> Option<Value> {
    let (last_key, parents) = segments.split_last()?;

    let mut current = root;
    for segment in parents {
        current = ensure_object(current)?
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    ensure_object(current)?.insert(last_key.clone(), new_value)
}

/// Removes the value stored at the given segments
///
/// Does not create anything. Returns the removed value, or `None` if the path
/// did not resolve.
pub(super) fn remove_value_at_path(root: &mut Value, segments: &[String]) -> Option<Value> {
    let (last_key, parents) = segments.split_last()?;

    let mut current = root;
    for segment in parents {
        current = current.as_object_mut()?.get_mut(segment)?;
    }

    current.as_object_mut()?.remove(last_key)
}

/// Replaces a non-mapping node with an empty mapping and returns the mapping
fn ensure_object(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }

    value.as_object_mut()
}
