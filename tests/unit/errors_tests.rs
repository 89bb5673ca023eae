/*!
 * Tests for error types, kinds and conversions
 */

use argguard::{declared_enum, ArgumentError, Bounds, Check, ErrorKind, Param};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shade {
    Light = 0,
    Dark = 1,
}

declared_enum!(Shade { Light, Dark });

#[test]
fn test_argumentError_display_shouldBeTheMessage() {
    let error = Check::is_not_empty("", "title").unwrap_err();
    assert_eq!(format!("{}", error), "Required argument title was empty.");
}

#[test]
fn test_argumentError_debug_shouldBeImplemented() {
    let error = ArgumentError::new(ErrorKind::OutOfRange, "n", "bad");
    let debug = format!("{:?}", error);
    assert!(debug.contains("OutOfRange"));
    assert!(debug.contains("bad"));
}

#[test]
fn test_errorKind_shouldMatchVariant() {
    let cases = [
        (Check::is_not_null::<u8>(None, "a").unwrap_err(), ErrorKind::NullArgument),
        (Check::is_not_blank(" ", "b").unwrap_err(), ErrorKind::InvalidArgument),
        (Check::is_less_than(2, 1, "c").unwrap_err(), ErrorKind::OutOfRange),
    ];
    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
    }
}

#[test]
fn test_customMessage_shouldNeverChangeKind() {
    let custom = Param::new("n").with_message("n is wrong");
    assert_eq!(Check::is_positive(0, custom).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(Check::is_not_default(0, custom).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(Check::is_not_null::<i32>(None, custom).unwrap_err().kind(), ErrorKind::NullArgument);
}

#[test]
fn test_argumentError_intoAnyhow_shouldKeepMessage() {
    fn parse_port(port: i64) -> anyhow::Result<i64> {
        let port = Check::is_positive(port, "port")?;
        Ok(port)
    }

    let error = parse_port(-1).unwrap_err();
    assert_eq!(error.to_string(), "The argument \"port\" cannot be non positive.");
    let inner = error.downcast_ref::<ArgumentError>().unwrap();
    assert_eq!(inner.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_argumentError_serialize_shouldTagWithKind() {
    let error = Check::is_one_of(4, &[1, 2], "level").unwrap_err();
    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json["kind"], "invalid_argument");
    assert_eq!(json["param"], "level");
    assert_eq!(json["message"], "Expected level to be one of [1, 2], but found 4.");

    let restored: ArgumentError = serde_json::from_value(json).unwrap();
    assert_eq!(restored, error);
}

#[test]
fn test_errorKind_serialize_shouldBeSnakeCase() {
    assert_eq!(serde_json::to_string(&ErrorKind::InvalidEnum).unwrap(), "\"invalid_enum\"");
    assert_eq!(serde_json::to_string(&ErrorKind::NullArgument).unwrap(), "\"null_argument\"");
}

#[test]
fn test_emptyCustomMessage_shouldKeepGeneratedText() {
    let error = Check::is_in_enum::<Shade, _>(9, Param::new("shade").with_message("")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidEnum);
    assert_eq!(error.message(), "The value of argument 'shade' (9) is invalid for Enum type 'Shade'.");

    let error = Check::has_all_items_in_range(&[1, 20], Bounds::new(0, "min", 10, "max"), Param::new("items").with_message(""))
        .unwrap_err();
    assert_eq!(
        error.message(),
        "Argument items had out of range item(s): 20 at index 1 is outside [0, 10]."
    );
}
