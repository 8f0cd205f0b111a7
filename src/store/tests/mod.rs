//! Unit tests for the store module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic, clippy::unwrap_used)]

mod tree;

use crate::store::{StatePath, StoreError};

#[test]
fn parse_splits_segments() {
    let path = StatePath::parse("app.config.theme").unwrap();

    assert_eq!(path.as_str(), "app.config.theme");
    assert_eq!(path.segments(), ["app", "config", "theme"]);
    assert_eq!(path.to_string(), "app.config.theme");
}

#[test]
fn parse_single_segment() {
    let path = StatePath::parse("counter").unwrap();

    assert_eq!(path.segments(), ["counter"]);
}

#[test]
fn numeric_segments_are_plain_keys() {
    let path = StatePath::parse("items.0.name").unwrap();

    assert_eq!(path.segments(), ["items", "0", "name"]);
}

#[test]
fn parse_rejects_malformed_paths() {
    let cases = [
        ("", "path is empty"),
        (".app", "path starts with a separator"),
        (".", "path starts with a separator"),
        ("app.", "path ends with a separator"),
        ("app..theme", "path contains an empty segment"),
    ];

    for (raw, expected_reason) in cases {
        match StatePath::parse(raw) {
            Err(StoreError::InvalidPath { path, reason }) => {
                assert_eq!(path, raw);
                assert_eq!(reason, expected_reason, "reason for {raw:?}");
            }
            other => panic!("expected InvalidPath for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn covers_self_and_descendants() {
    let parent = StatePath::parse("parent").unwrap();

    assert!(parent.covers(&StatePath::parse("parent").unwrap()));
    assert!(parent.covers(&StatePath::parse("parent.child").unwrap()));
    assert!(parent.covers(&StatePath::parse("parent.child.leaf").unwrap()));
}

#[test]
fn covers_respects_segment_boundaries() {
    let parent = StatePath::parse("parent").unwrap();

    assert!(!parent.covers(&StatePath::parse("parental").unwrap()));
    assert!(!parent.covers(&StatePath::parse("other.parent").unwrap()));
}

#[test]
fn descendants_do_not_cover_ancestors_or_siblings() {
    let child = StatePath::parse("parent.child").unwrap();

    assert!(!child.covers(&StatePath::parse("parent").unwrap()));
    assert!(!child.covers(&StatePath::parse("parent.sibling").unwrap()));
}

#[test]
fn invalid_path_error_message() {
    let error = StatePath::parse("a..b").unwrap_err();

    assert_eq!(
        error.to_string(),
        "invalid state path 'a..b': path contains an empty segment"
    );
}
