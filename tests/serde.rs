#![cfg(feature = "serde")]

use failcode::{CallStack, DebugMap, Field, Frame, IntCode, StringCode};

#[test]
fn frame_round_trips() {
    let frame = Frame::new("app::run", "src/main.rs", 12);
    let json = serde_json::to_string(&frame).expect("serialize");
    let back: Frame = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, frame);
}

#[test]
fn callstack_round_trips() {
    let stack = CallStack::from_frames(vec![
        Frame::new("app::inner", "src/inner.rs", 3),
        Frame::new("app::outer", "src/outer.rs", 9),
    ])
    .expect("non-empty");
    let json = serde_json::to_string(&stack).expect("serialize");
    let back: CallStack = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, stack);
}

#[test]
fn debug_map_round_trips_in_order() {
    let map: DebugMap = [("b", "2"), ("a", "1")].into_iter().collect();
    let json = serde_json::to_string(&map).expect("serialize");
    let back: DebugMap = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, map);
    assert_eq!(back.iter().next(), Some(("b", "2")));
}

#[test]
fn string_codes_serialize_as_their_token() {
    let json = serde_json::to_string(&StringCode("code_a")).expect("serialize");
    assert_eq!(json, "\"code_a\"");
}

#[test]
fn int_codes_round_trip() {
    let json = serde_json::to_string(&IntCode(1)).expect("serialize");
    let back: IntCode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, IntCode(1));
}

#[test]
fn fields_round_trip() {
    let field = Field::message("xxx");
    let json = serde_json::to_string(&field).expect("serialize");
    let back: Field = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, field);
}
