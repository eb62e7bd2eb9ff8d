use crate::*;
use serde_json::json;

#[test]
fn metadata_comes_from_the_first_object() {
    let kb = decode(&json!([{ "name": "test" }])).unwrap();
    assert_eq!(kb.meta.name, "test");
    assert!(kb.keys.is_empty());
}

#[test]
fn metadata_after_the_first_element_is_rejected() {
    let err = decode(&json!([[], { "name": "test" }])).unwrap_err();
    assert_eq!(
        err,
        Error::MisplacedMetadata {
            index: 1,
            fragment: json!({ "name": "test" }),
        }
    );
}

#[test]
fn metadata_does_not_disturb_key_positions() {
    let kb = decode(&json!([{ "name": "60%", "backcolor": "#222222" }, ["A"], ["B"]])).unwrap();
    assert_eq!(kb.meta.backcolor, "#222222");
    assert_eq!(kb.keys[0].y, 0.0);
    assert_eq!(kb.keys[1].y, 1.0);
}
