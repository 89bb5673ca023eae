/*!
 * Element-level checks over collections of optional values.
 *
 * The whole collection is scanned so the message can report how many
 * elements violate the rule, not only the first one.
 */

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::quoted;

use super::emptiness::is_whitespace;

/// Index of the first violation and total number of violations
fn scan<T>(values: &[T], violates: impl Fn(&T) -> bool) -> Option<(usize, usize)> {
    let mut first = None;
    let mut count = 0;
    for (index, value) in values.iter().enumerate() {
        if violates(value) {
            first.get_or_insert(index);
            count += 1;
        }
    }
    first.map(|index| (index, count))
}

fn check_elements<'v, T>(
    values: &'v [T],
    param: Param<'_>,
    what: &str,
    violates: impl Fn(&T) -> bool,
) -> Result<&'v [T]> {
    match scan(values, violates) {
        None => Ok(values),
        Some((first, count)) => Err(ArgumentError::raise(
            ErrorKind::InvalidArgument,
            param.name(),
            param.message(),
            || {
                format!(
                    "The argument {} cannot contain {} elements ({} found, first at index {}).",
                    quoted(param.name()),
                    what,
                    count,
                    first
                )
            },
        )),
    }
}

/// Reject any `None` element
pub fn no_nulls<'v, T>(values: &'v [Option<T>], param: Param<'_>) -> Result<&'v [Option<T>]> {
    check_elements(values, param, "null", Option::is_none)
}

/// Reject any `None` or empty string element
pub fn no_empty_elements<'v, S: AsRef<str>>(
    values: &'v [Option<S>],
    param: Param<'_>,
) -> Result<&'v [Option<S>]> {
    check_elements(values, param, "empty", |value| {
        value.as_ref().is_none_or(|s| s.as_ref().is_empty())
    })
}

/// Reject any `None`, empty, or whitespace-only string element
pub fn no_blank_elements<'v, S: AsRef<str>>(
    values: &'v [Option<S>],
    param: Param<'_>,
) -> Result<&'v [Option<S>]> {
    check_elements(values, param, "empty or white space", |value| {
        value.as_ref().is_none_or(|s| is_whitespace(s.as_ref()))
    })
}
