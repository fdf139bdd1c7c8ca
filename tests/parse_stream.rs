use lexi_stream::{FormatError, Message, Role, format_content, parse_sse_data};
use serde_json::{Value, json};

#[test]
fn parse_buffered_reply() {
    let raw = concat!(
        "data: {\"content\":\"Here are three picks:\"}\n\n",
        "data: 1. Dune\n\n",
        "event: keepalive\n\n",
        "data: {\"content\":\"2. Hyperion\"}\n",
        "data:   3.   Foundation  \n\n",
    );
    assert_eq!(
        parse_sse_data(&Value::String(raw.into())).unwrap(),
        "Here are three picks: 1. Dune 2. Hyperion 3. Foundation"
    );
}

#[test]
fn null_input_is_rejected() {
    let err = parse_sse_data(&Value::Null).unwrap_err();
    assert!(matches!(err, FormatError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Input must be a string.");
}

#[test]
fn format_assistant_message_from_json() {
    let msg: Message = serde_json::from_value(json!({
        "role": "assistant",
        "content": "data: This is formatted\n",
        "id": "x"
    }))
    .unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(format_content(&msg), "This is formatted");
}
