/*!
 * Range checks.
 *
 * Every check first verifies that the bounds are ordered. A reversed range is
 * reported against the minimum's label with the generated text, even when a
 * custom message was supplied for the argument.
 */

use std::fmt::Debug;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::{Bounds, Param};

/// Which ends of a range are part of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// `[min, max]`
    Inclusive,
    /// `(min, max)`
    Exclusive,
    /// `(min, max]`
    LeftOpen,
    /// `[min, max)`
    RightOpen,
}

impl Interval {
    fn contains<T: PartialOrd>(self, value: &T, min: &T, max: &T) -> bool {
        match self {
            Interval::Inclusive => value >= min && value <= max,
            Interval::Exclusive => value > min && value < max,
            Interval::LeftOpen => value > min && value <= max,
            Interval::RightOpen => value >= min && value < max,
        }
    }

    fn render<T: Debug>(self, min: &T, max: &T) -> String {
        let (open, close) = match self {
            Interval::Inclusive => ('[', ']'),
            Interval::Exclusive => ('(', ')'),
            Interval::LeftOpen => ('(', ']'),
            Interval::RightOpen => ('[', ')'),
        };
        format!("{}{:?}, {:?}{}", open, min, max, close)
    }
}

/// Fail when `min > max` or the bounds cannot be compared
pub fn validate_range<T: PartialOrd>(bounds: &Bounds<'_, T>) -> Result<()> {
    if bounds.min <= bounds.max {
        return Ok(());
    }
    Err(ArgumentError::raise(
        ErrorKind::InvalidArgument,
        bounds.min_name,
        None,
        || format!("{} should be less or equal than {}", bounds.min_name, bounds.max_name),
    ))
}

/// Check `value` against `bounds` using the given interval
pub fn between<T: PartialOrd + Debug>(
    value: T,
    bounds: Bounds<'_, T>,
    interval: Interval,
    param: Param<'_>,
) -> Result<T> {
    validate_range(&bounds)?;
    if interval.contains(&value, &bounds.min, &bounds.max) {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::OutOfRange,
        param.name(),
        param.message(),
        || {
            format!(
                "Input {} was out of range {}, found {:?}.",
                param.name(),
                interval.render(&bounds.min, &bounds.max),
                value
            )
        },
    ))
}

/// Require every element to lie within `[min, max]`
pub fn all_items_in_range<'v, T: PartialOrd + Debug>(
    values: &'v [T],
    bounds: Bounds<'_, T>,
    param: Param<'_>,
) -> Result<&'v [T]> {
    validate_range(&bounds)?;
    let outside = values
        .iter()
        .enumerate()
        .find(|(_, item)| !Interval::Inclusive.contains(*item, &bounds.min, &bounds.max));

    match outside {
        None => Ok(values),
        Some((index, item)) => Err(ArgumentError::raise(
            ErrorKind::OutOfRange,
            param.name(),
            param.message(),
            || {
                format!(
                    "Argument {} had out of range item(s): {:?} at index {} is outside {}.",
                    param.name(),
                    item,
                    index,
                    Interval::Inclusive.render(&bounds.min, &bounds.max)
                )
            },
        )),
    }
}
