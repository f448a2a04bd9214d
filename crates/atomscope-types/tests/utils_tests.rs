use atomscope_types::*;

#[test]
fn test_truncate_text() {
    assert_eq!(truncate_text("short", 10), "short");

    let long = "a description that runs well past the card width";
    let truncated = truncate_text(long, 13);
    assert_eq!(truncated, "a description...");
}

#[test]
fn test_truncate_text_multibyte() {
    assert_eq!(truncate_text("éléphant", 3), "élé...");
}

#[test]
fn test_to_number_matches_parse_float_for_numeric_strings() {
    for s in ["0", "1", "-1", "3.5", "1e3", "0.000001", "123456789.25", "-0.5"] {
        let expected: f64 = s.parse().unwrap();
        assert_eq!(to_number(Some(&RawNumber::from(s))), expected, "input {s}");
    }
}

#[test]
fn test_to_number_degenerate_inputs_are_zero() {
    assert_eq!(to_number(None), 0.0);
    assert_eq!(to_number(Some(&RawNumber::from(""))), 0.0);
    assert_eq!(to_number(Some(&RawNumber::from("n/a"))), 0.0);

    let null: Option<RawNumber> = serde_json::from_str("null").unwrap();
    assert_eq!(to_number(null.as_ref()), 0.0);
}

#[test]
fn test_wallet_address_examples() {
    assert!(is_wallet_address("0xABCDEF1234567890abcdef1234567890ABCDEF12"));
    assert!(!is_wallet_address("0x123"));
    assert!(!is_wallet_address("not-an-address"));
}
