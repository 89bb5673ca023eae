/*!
 * Presence checks: null and default values.
 */

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::{quoted, short_type_name};

/// Unwrap a required value, failing when it is absent
pub fn not_null<T>(value: Option<T>, param: Param<'_>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(ArgumentError::raise(
            ErrorKind::NullArgument,
            param.name(),
            param.message(),
            || format!("Value cannot be null. (Parameter '{}')", param.name()),
        )),
    }
}

/// Reject the zero/default value of `T`
pub fn not_default<T: Default + PartialEq>(value: T, param: Param<'_>) -> Result<T> {
    if value == T::default() {
        return Err(ArgumentError::raise(
            ErrorKind::InvalidArgument,
            param.name(),
            param.message(),
            || {
                format!(
                    "{} cannot be the default value of {}.",
                    quoted(param.name()),
                    short_type_name::<T>()
                )
            },
        ));
    }
    Ok(value)
}

/// Like `not_default`, but an absent value passes through unchanged
pub fn not_default_if_present<T: Default + PartialEq>(
    value: Option<T>,
    param: Param<'_>,
) -> Result<Option<T>> {
    value.map(|v| not_default(v, param)).transpose()
}

pub fn not_null_or_default<T: Default + PartialEq>(value: Option<T>, param: Param<'_>) -> Result<T> {
    let value = not_null(value, param)?;
    not_default(value, param)
}
