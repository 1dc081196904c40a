use super::*;

#[test]
fn test_record_id_from_u128_is_deterministic() {
    assert_eq!(TransactionId::from_u128(7), TransactionId::from_u128(7));
    assert_ne!(AccountId::from_u128(1), AccountId::from_u128(2));
}

#[test]
fn test_record_id_display() {
    assert_eq!(
        AccountId::from_u128(1).to_string(),
        "00000000-0000-0000-0000-000000000001"
    );
}

#[test]
fn test_record_id_orders_by_value() {
    assert!(AccountId::from_u128(1) < AccountId::from_u128(2));
}

#[test]
fn test_record_id_serde_is_transparent() {
    let id = TransactionId::from_u128(255);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"00000000-0000-0000-0000-0000000000ff\"");
    let back: TransactionId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
