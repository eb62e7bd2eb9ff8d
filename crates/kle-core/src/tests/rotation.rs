use crate::*;
use serde_json::json;

#[test]
fn rotation_is_allowed_on_the_first_cell() {
    for field in ["r", "rx", "ry"] {
        let input = json!([[{ field: 45 }, "1", "2"]]);
        assert!(decode(&input).is_ok(), "{field}");
    }
}

#[test]
fn rotation_is_rejected_on_later_cells() {
    for field in ["r", "rx", "ry"] {
        let input = json!([["1", { field: 45 }, "2"]]);
        let err = decode(&input).unwrap_err();
        assert_eq!(
            err,
            Error::MisplacedRotation {
                row: 0,
                cell: 1,
                fragment: json!({ field: 45 }),
            },
            "{field}"
        );
    }
}

#[test]
fn zero_rotation_still_counts_as_misplaced() {
    let err = decode(&json!([[{ "x": 1 }, { "r": 0 }, "1"]])).unwrap_err();
    assert!(matches!(err, Error::MisplacedRotation { cell: 1, .. }));
}

#[test]
fn rotation_fields_are_copied_onto_keys() {
    let kb = decode(&json!([
        [{ "r": 15, "rx": 2, "ry": 3 }, "A", "B"],
        [{ "r": 0, "rx": 0 }, "C"]
    ]))
    .unwrap();
    for key in &kb.keys[..2] {
        assert_eq!(key.rotation_angle, 15.0);
        assert_eq!(key.rotation_x, 2.0);
        assert_eq!(key.rotation_y, 3.0);
    }
    assert_eq!(kb.keys[2].rotation_angle, 0.0);
    assert_eq!(kb.keys[2].rotation_x, 0.0);
    assert_eq!(kb.keys[2].rotation_y, 3.0);
}

#[test]
fn row_end_returns_x_to_the_rotation_origin() {
    let kb = decode(&json!([[{ "rx": 4 }, "A", "B"], ["C"]])).unwrap();
    assert_eq!(kb.keys[0].x, 0.0);
    assert_eq!(kb.keys[1].x, 1.0);
    assert_eq!(kb.keys[2].x, 4.0);
    assert_eq!(kb.keys[2].y, 1.0);
}
