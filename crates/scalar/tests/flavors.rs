use datakind_scalar::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_immutable_trim_returns_new_instance() {
    let original = ImmutableText::from_string("  Hello  ");
    let trimmed = original.trim();

    assert_eq!(trimmed.value(), "Hello");
    assert_eq!(original.value(), "  Hello  ");
}

#[test]
fn test_mutable_returns_same_handle() {
    let mut text = MutableText::from_string("abc");
    let handle: *const MutableText = &text;

    let returned = text.reverse();
    assert!(std::ptr::eq(returned, handle));
    assert_eq!(text.value(), "cba");
}

#[test]
fn test_readonly_converts_to_boolean() {
    assert!(ReadonlyInteger::from_integer(4).to_boolean().value());
    assert!(!ReadonlyInteger::from_integer(0).to_boolean().value());
}

#[test]
fn test_readonly_can_be_thawed() {
    let frozen = ReadonlyText::from_string("draft");
    let mut live = frozen.to_mutable();
    live.to_upper();

    assert_eq!(live.value(), "DRAFT");
    assert_eq!(frozen.value(), "draft");
}

#[rstest]
#[case("abcdef", -3, None, "def")]
#[case("abcdef", 1, Some(-2), "bcd")]
#[case("abcdef", 0, Some(0), "")]
#[case("abcdef", 2, Some(2), "cd")]
#[case("abcdef", -6, None, "abcdef")]
fn test_sub_string(
    #[case] input: &str,
    #[case] start: i64,
    #[case] length: Option<i64>,
    #[case] expected: &str,
) {
    let text = ImmutableText::from_string(input);
    assert_eq!(text.sub_string(start, length).unwrap().value(), expected);
}

#[rstest]
#[case(7, None)]
#[case(-7, None)]
#[case(1, Some(6))]
#[case(1, Some(-6))]
fn test_sub_string_out_of_range(#[case] start: i64, #[case] length: Option<i64>) {
    let text = ImmutableText::from_string("abcdef");
    assert!(matches!(
        text.sub_string(start, length),
        Err(DataError::OutOfRange { .. })
    ));
}

#[rstest]
#[case("7", 3, "007")]
#[case("1234", 3, "1234")]
#[case("", 2, "00")]
fn test_pad_left(#[case] input: &str, #[case] length: i64, #[case] expected: &str) {
    let text = ImmutableText::from_string(input);
    assert_eq!(text.pad_left(length, "0").unwrap().value(), expected);
}

#[test]
fn test_pad_validation() {
    let text = ImmutableText::from_string("x");
    assert!(matches!(
        text.pad_right(0, " "),
        Err(DataError::InvalidLength { .. })
    ));
    assert!(matches!(
        text.pad_right_extra(2, ""),
        Err(DataError::EmptyInput { .. })
    ));
    assert_eq!(text.pad_left_extra(2, "ab").unwrap().value(), "abx");
}

#[test]
fn test_number_format_through_wrapper() {
    let de = NumberFormat::de();
    assert_eq!(ImmutableInteger::from_integer(1_234_567).format(&de), "1.234.567");
    assert_eq!(ReadonlyFloat::from_float(1234.5).format(&de), "1.234,50");
}

#[test]
fn test_cross_kind_conversions() {
    let text = ImmutableText::from_string("12");
    let n = text.to_integer().unwrap();
    let sum = n.add(30).unwrap();
    assert_eq!(sum.to_text().value(), "42");
    assert_eq!(sum.to_float().value(), 42.0);
    assert_eq!(ImmutableBoolean::from_string("yes").to_integer().value(), 1);
}

#[test]
fn test_serialization_is_transparent() {
    let json = serde_json::json!({
        "name": ImmutableText::from_string("ada"),
        "age": ReadonlyInteger::from_integer(36),
        "score": MutableFloat::from_float(9.5),
        "active": ReadonlyBoolean::from_boolean(true),
    });
    assert_eq!(
        json,
        serde_json::json!({"name": "ada", "age": 36, "score": 9.5, "active": true})
    );
}
