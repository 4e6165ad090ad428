use super::LineMode;

#[test]
fn bool_maps_to_terminator() {
    assert_eq!(LineMode::from(true).terminator(), "\n");
    assert_eq!(LineMode::from(false).terminator(), "");
    assert!(bool::from(LineMode::WithNewline));
    assert!(!bool::from(LineMode::WithoutNewline));
}

#[test]
fn default_keeps_one_record_per_line() {
    assert!(LineMode::default().append_newline());
}
