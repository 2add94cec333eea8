#![cfg(feature = "serde")]

use wrapped::{wrap, Optional};

#[test]
fn encodes_like_an_option() {
    assert_eq!(serde_json::to_string(&wrap(Some(1))).unwrap(), "1");
    assert_eq!(serde_json::to_string(&wrap(None::<i32>)).unwrap(), "null");
}

#[test]
fn decodes_like_an_option() {
    let just: Optional<String> = serde_json::from_str("\"x\"").unwrap();
    assert_eq!(just, wrap(Some("x".to_owned())));

    let nothing: Optional<String> = serde_json::from_str("null").unwrap();
    assert!(nothing.is_blank());
}

#[test]
fn decodes_nested_in_collections() {
    let values: Vec<Optional<u8>> = serde_json::from_str("[1, null, 3]").unwrap();
    assert_eq!(values, [wrap(Some(1)), wrap(None), wrap(Some(3))]);
}
