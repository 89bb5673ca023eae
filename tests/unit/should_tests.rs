/*!
 * Tests for the fluent form and its parity with the static form
 */

use std::io::Cursor;

use argguard::{Bounds, Check, It, Param, Should, StringComparison};
use regex::Regex;

#[test]
fn test_should_andCheck_shouldProduceIdenticalErrors() {
    let bounds = Bounds::new(1, "min", 3, "max");
    let pattern = Regex::new(r"^\w+$").unwrap();

    let pairs = vec![
        (
            Check::is_not_null::<u8>(None, "a").unwrap_err(),
            Should.not_be_null::<u8>(None, "a").unwrap_err(),
        ),
        (
            Check::is_not_default(0, "b").unwrap_err(),
            Should.not_be_default(0, "b").unwrap_err(),
        ),
        (
            Check::is_not_null_or_empty::<&str>(Some(""), "c").unwrap_err(),
            Should.not_be_null_or_empty::<&str>(Some(""), "c").unwrap_err(),
        ),
        (
            Check::is_not_blank("\t", "d").unwrap_err(),
            Should.not_be_blank("\t", "d").unwrap_err(),
        ),
        (
            Check::has_no_nulls(&[Some(1), None], "e").unwrap_err(),
            Should.have_no_nulls(&[Some(1), None], "e").unwrap_err(),
        ),
        (
            Check::is_greater_than_or_equal_to(0, 1, "f").unwrap_err(),
            Should.be_greater_than_or_equal_to(0, 1, "f").unwrap_err(),
        ),
        (
            Check::is_left_opened_between(1, bounds, "g").unwrap_err(),
            Should.be_left_opened_between(1, bounds, "g").unwrap_err(),
        ),
        (
            Check::is_negative_or_zero(1, "h").unwrap_err(),
            Should.be_negative_or_zero(1, "h").unwrap_err(),
        ),
        (
            Check::matches("a b", &pattern, "i").unwrap_err(),
            Should.match_pattern("a b", &pattern, "i").unwrap_err(),
        ),
        (
            Check::is_one_of_str("X", &["x"], StringComparison::Ordinal, "j").unwrap_err(),
            Should.be_one_of_str("X", &["x"], StringComparison::Ordinal, "j").unwrap_err(),
        ),
    ];

    for (from_check, from_should) in pairs {
        assert_eq!(from_check, from_should);
    }
}

#[test]
fn test_should_successPath_shouldReturnInput() {
    let should = It::should();
    assert_eq!(should.not_be_null(Some("x"), "x").unwrap(), "x");
    assert_eq!(should.be_inclusive_between(2, Bounds::new(1, "min", 3, "max"), "x").unwrap(), 2);
    assert_eq!(should.be_right_opened_between(1, Bounds::new(1, "min", 3, "max"), "x").unwrap(), 1);
    assert_eq!(should.be_exclusive_between(2.5, Bounds::new(1.0, "min", 3.0, "max"), "x").unwrap(), 2.5);
    assert_eq!(should.be_positive_or_zero(0u64, "x").unwrap(), 0);
    assert_eq!(should.be_equal_to("a", "a", "x").unwrap(), "a");
    assert_eq!(should.be_less_than(1, 2, "x").unwrap(), 1);
    assert!(should.not_be_nan(1.0f32, "x").is_ok());
    assert!(should.be_one_of_by("B", &["a", "b"], |a, b| a.eq_ignore_ascii_case(b), "x").is_ok());
}

#[test]
fn test_should_streamChecks_shouldUseCapabilityNames() {
    let mut cursor = Cursor::new(vec![0u8; 4]);
    assert!(Should.support_reading(&mut cursor, "cursor").is_ok());
    assert!(Should.support_writing(&mut cursor, "cursor").is_ok());
    assert!(Should.support_seeking(&mut cursor, "cursor").is_ok());
    assert!(Should.be_at_start_position(&mut cursor, "cursor").is_ok());
}

#[test]
fn test_should_withCustomMessage_shouldReplaceText() {
    let error = It::SHOULD
        .not_be_empty_iter(std::iter::empty::<u8>(), Param::new("items").with_message("no items"))
        .unwrap_err();
    assert_eq!(error.message(), "no items");
    assert_eq!(error.param(), "items");
}
