//! Card layout rendering

use insta::assert_snapshot;
use phrasewheel_core::arrange;
use phrasewheel_types::{Capacity, FaceSide, Seed};

#[test]
fn text_layout_two_slots() {
    let layout = arrange(&["go", "stop", "wait"], Capacity::new(2).unwrap(), None).layout();
    assert_snapshot!(layout.to_string(), @r"
    Front
        0.0  Go
      180.0  Stop

    Back
        0.0  Wait
      180.0  ???
    ");
}

#[test]
fn seed_is_shown_in_headers() {
    let layout = arrange(&["go"], Capacity::new(1).unwrap(), Some(Seed::new(5))).layout();
    let text = layout.to_string();
    assert!(text.starts_with("Front (seed 5)\n"));
    assert!(text.contains("\nBack (seed 5)\n"));
}

#[test]
fn angles_spread_evenly() {
    let layout = arrange::<&str>(&[], Capacity::DEFAULT, None).layout();
    for face in &layout.faces {
        assert_eq!(face.slots.len(), 72);
        assert!((face.slots[1].angle - 5.0).abs() < f64::EPSILON);
        assert!((face.slots[71].angle - 355.0).abs() < 1e-9);
    }
    assert_eq!(layout.faces[0].side, FaceSide::Front);
    assert_eq!(layout.faces[1].side, FaceSide::Back);
}

#[test]
fn json_layout_shape() {
    let layout = arrange(&["go", "stop"], Capacity::new(1).unwrap(), None).layout();
    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "capacity": 1,
            "faces": [
                { "side": "front", "slots": [{ "index": 0, "angle": 0.0, "phrase": "Go" }] },
                { "side": "back", "slots": [{ "index": 0, "angle": 0.0, "phrase": "Stop" }] }
            ]
        })
    );
}
