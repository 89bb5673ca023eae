/*!
 * Membership checks: declared enum members and explicit sets of valid values.
 */

use std::fmt::Debug;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::{short_type_name, value_list};

/// An enumeration with a closed list of declared members.
///
/// Implement it by hand for "open" newtype enums, or with `declared_enum!`
/// for fieldless enums.
pub trait DeclaredEnum: Copy + PartialEq + Debug + 'static {
    /// Every declared member
    const MEMBERS: &'static [Self];

    /// Integer value of a member
    fn discriminant(self) -> i64;
}

fn enum_error<E: DeclaredEnum>(param: Param<'_>, rendered: String) -> ArgumentError {
    ArgumentError::raise(ErrorKind::InvalidEnum, param.name(), param.message(), || {
        format!(
            "The value of argument '{}' ({}) is invalid for Enum type '{}'.",
            param.name(),
            rendered,
            short_type_name::<E>()
        )
    })
}

/// Require a raw integer to be the discriminant of a declared member of `E`
pub fn in_enum<E: DeclaredEnum, V: Copy + Into<i64>>(raw: V, param: Param<'_>) -> Result<V> {
    let wanted: i64 = raw.into();
    if E::MEMBERS.iter().any(|member| member.discriminant() == wanted) {
        return Ok(raw);
    }
    Err(enum_error::<E>(param, wanted.to_string()))
}

/// Require a value of `E` to be one of its declared members
pub fn enum_member<E: DeclaredEnum>(value: E, param: Param<'_>) -> Result<E> {
    if E::MEMBERS.contains(&value) {
        return Ok(value);
    }
    Err(enum_error::<E>(param, value.discriminant().to_string()))
}

/// How two strings are compared by `one_of_str`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringComparison {
    /// Byte-for-byte equality
    #[default]
    Ordinal,
    /// Equality after Unicode lowercase folding
    OrdinalIgnoreCase,
}

impl StringComparison {
    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            StringComparison::Ordinal => left == right,
            StringComparison::OrdinalIgnoreCase => {
                left.eq_ignore_ascii_case(right) || left.to_lowercase() == right.to_lowercase()
            }
        }
    }
}

/// Require `value` to equal one of `valid` according to `equals`
pub fn one_of_by<T: Debug>(
    value: T,
    valid: &[T],
    equals: impl Fn(&T, &T) -> bool,
    param: Param<'_>,
) -> Result<T> {
    if valid.iter().any(|candidate| equals(&value, candidate)) {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::InvalidArgument,
        param.name(),
        param.message(),
        || {
            format!(
                "Expected {} to be one of {}, but found {:?}.",
                param.name(),
                value_list(valid),
                value
            )
        },
    ))
}

/// Require `value` to equal one of `valid`
pub fn one_of<T: PartialEq + Debug>(value: T, valid: &[T], param: Param<'_>) -> Result<T> {
    one_of_by(value, valid, |a, b| a == b, param)
}

/// Require a string to be one of `valid` under the given comparison
pub fn one_of_str<'s>(
    value: &'s str,
    valid: &[&str],
    comparison: StringComparison,
    param: Param<'_>,
) -> Result<&'s str> {
    if valid.iter().any(|candidate| comparison.equals(value, candidate)) {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::InvalidArgument,
        param.name(),
        param.message(),
        || {
            format!(
                "Expected {} to be one of {}, but found {:?}.",
                param.name(),
                value_list(valid),
                value
            )
        },
    ))
}
