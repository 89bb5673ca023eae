/*!
 * Comparisons against a single expected value.
 *
 * Values that are not comparable (a NaN on either side) never satisfy a
 * comparison and fail like any other out-of-range value.
 */

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;

fn compare<T: PartialOrd + Debug>(
    value: T,
    expected: &T,
    param: Param<'_>,
    accept: impl Fn(Ordering) -> bool,
    relation: &str,
) -> Result<T> {
    match value.partial_cmp(expected) {
        Some(ordering) if accept(ordering) => Ok(value),
        _ => Err(ArgumentError::raise(
            ErrorKind::OutOfRange,
            param.name(),
            param.message(),
            || {
                format!(
                    "Expected argument {} to be {} {:?}, but found {:?}.",
                    param.name(),
                    relation,
                    expected,
                    value
                )
            },
        )),
    }
}

pub fn equal_to<T: PartialOrd + Debug>(value: T, expected: T, param: Param<'_>) -> Result<T> {
    compare(value, &expected, param, Ordering::is_eq, "equal to")
}

pub fn less_than<T: PartialOrd + Debug>(value: T, expected: T, param: Param<'_>) -> Result<T> {
    compare(value, &expected, param, Ordering::is_lt, "less than")
}

pub fn less_than_or_equal_to<T: PartialOrd + Debug>(
    value: T,
    expected: T,
    param: Param<'_>,
) -> Result<T> {
    compare(value, &expected, param, Ordering::is_le, "less than or equal to")
}

pub fn greater_than<T: PartialOrd + Debug>(value: T, expected: T, param: Param<'_>) -> Result<T> {
    compare(value, &expected, param, Ordering::is_gt, "greater than")
}

pub fn greater_than_or_equal_to<T: PartialOrd + Debug>(
    value: T,
    expected: T,
    param: Param<'_>,
) -> Result<T> {
    compare(value, &expected, param, Ordering::is_ge, "greater than or equal to")
}
