// crates/shared-kernel/tests/serde_roundtrip.rs
use multigroup_shared_kernel::KeyValue;

#[test]
fn json_roundtrip() {
    let original = vec![KeyValue::new("Country", "USA".to_string()), KeyValue::new("Age", "30".to_string())];
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Vec<KeyValue<String>> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn json_uses_key_and_value_fields() {
    let kv = KeyValue::new("Age", 30u32);
    let json = serde_json::to_value(&kv).expect("serializes");
    assert_eq!(json, serde_json::json!({ "key": "Age", "value": 30 }));
}
