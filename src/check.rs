/*!
 * Static calling convention: `Check::is_positive(count, "count")`.
 *
 * Every function returns the validated value so checks can be chained or
 * used inline. The label comes last and accepts a `&str` or a `Param`
 * carrying a custom message.
 */

use std::fmt::Debug;
use std::iter::Peekable;

use regex::Regex;

use crate::errors::Result;
use crate::guard::{
    self, DeclaredEnum, Emptiable, FloatingPoint, Interval, Numeric, StreamCapabilities,
    StringComparison,
};
use crate::param::{Bounds, Param};

/// Static-style guard clauses
pub struct Check;

impl Check {
    // Presence

    pub fn is_not_null<'a, T>(value: Option<T>, param: impl Into<Param<'a>>) -> Result<T> {
        guard::presence::not_null(value, param.into())
    }

    pub fn is_not_default<'a, T: Default + PartialEq>(
        value: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::presence::not_default(value, param.into())
    }

    pub fn is_not_default_if_present<'a, T: Default + PartialEq>(
        value: Option<T>,
        param: impl Into<Param<'a>>,
    ) -> Result<Option<T>> {
        guard::presence::not_default_if_present(value, param.into())
    }

    pub fn is_not_null_or_default<'a, T: Default + PartialEq>(
        value: Option<T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::presence::not_null_or_default(value, param.into())
    }

    // Emptiness

    pub fn is_not_empty<'a, C: Emptiable>(value: C, param: impl Into<Param<'a>>) -> Result<C> {
        guard::emptiness::not_empty(value, param.into())
    }

    pub fn is_not_null_or_empty<'a, C: Emptiable>(
        value: Option<C>,
        param: impl Into<Param<'a>>,
    ) -> Result<C> {
        guard::emptiness::not_null_or_empty(value, param.into())
    }

    /// Probe a lazy sequence; the probed item stays in the returned `Peekable`
    pub fn is_not_empty_iter<'a, I: Iterator>(
        iter: I,
        param: impl Into<Param<'a>>,
    ) -> Result<Peekable<I>> {
        guard::emptiness::not_empty_iter(iter, param.into())
    }

    pub fn is_not_blank<'a, S: AsRef<str>>(value: S, param: impl Into<Param<'a>>) -> Result<S> {
        guard::emptiness::not_blank(value, param.into())
    }

    pub fn is_not_null_or_whitespace<'a, S: AsRef<str>>(
        value: Option<S>,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::emptiness::not_null_or_whitespace(value, param.into())
    }

    // Elements

    pub fn has_no_nulls<'v, 'a, T>(
        values: &'v [Option<T>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<T>]> {
        guard::elements::no_nulls(values, param.into())
    }

    pub fn has_no_empty_elements<'v, 'a, S: AsRef<str>>(
        values: &'v [Option<S>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<S>]> {
        guard::elements::no_empty_elements(values, param.into())
    }

    pub fn has_no_blank_elements<'v, 'a, S: AsRef<str>>(
        values: &'v [Option<S>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<S>]> {
        guard::elements::no_blank_elements(values, param.into())
    }

    // Comparison

    pub fn is_equal_to<'a, T: PartialOrd + Debug>(
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::equal_to(value, expected, param.into())
    }

    pub fn is_less_than<'a, T: PartialOrd + Debug>(
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::less_than(value, expected, param.into())
    }

    pub fn is_less_than_or_equal_to<'a, T: PartialOrd + Debug>(
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::less_than_or_equal_to(value, expected, param.into())
    }

    pub fn is_greater_than<'a, T: PartialOrd + Debug>(
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::greater_than(value, expected, param.into())
    }

    pub fn is_greater_than_or_equal_to<'a, T: PartialOrd + Debug>(
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::greater_than_or_equal_to(value, expected, param.into())
    }

    // Ranges

    /// Fail when the bounds are reversed
    pub fn valid_range<T: PartialOrd>(bounds: &Bounds<'_, T>) -> Result<()> {
        guard::range::validate_range(bounds)
    }

    /// `min <= value <= max`
    pub fn is_inclusive_between<'a, T: PartialOrd + Debug>(
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::Inclusive, param.into())
    }

    /// `min < value < max`
    pub fn is_exclusive_between<'a, T: PartialOrd + Debug>(
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::Exclusive, param.into())
    }

    /// `min < value <= max`
    pub fn is_left_opened_between<'a, T: PartialOrd + Debug>(
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::LeftOpen, param.into())
    }

    /// `min <= value < max`
    pub fn is_right_opened_between<'a, T: PartialOrd + Debug>(
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::RightOpen, param.into())
    }

    pub fn has_all_items_in_range<'v, 'a, T: PartialOrd + Debug>(
        values: &'v [T],
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [T]> {
        guard::range::all_items_in_range(values, bounds, param.into())
    }

    // Sign

    pub fn is_positive<'a, T: Numeric>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::positive(value, param.into())
    }

    pub fn is_positive_or_zero<'a, T: Numeric>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::positive_or_zero(value, param.into())
    }

    pub fn is_negative<'a, T: Numeric>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::negative(value, param.into())
    }

    pub fn is_negative_or_zero<'a, T: Numeric>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::negative_or_zero(value, param.into())
    }

    // NaN

    pub fn is_nan<'a, T: FloatingPoint>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::nan::nan(value, param.into())
    }

    pub fn is_not_nan<'a, T: FloatingPoint>(value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::nan::not_nan(value, param.into())
    }

    // Membership

    /// Raw integer must be the discriminant of a declared member of `E`
    pub fn is_in_enum<'a, E: DeclaredEnum, V: Copy + Into<i64>>(
        raw: V,
        param: impl Into<Param<'a>>,
    ) -> Result<V> {
        guard::membership::in_enum::<E, V>(raw, param.into())
    }

    pub fn is_enum_member<'a, E: DeclaredEnum>(value: E, param: impl Into<Param<'a>>) -> Result<E> {
        guard::membership::enum_member(value, param.into())
    }

    pub fn is_one_of<'a, T: PartialEq + Debug>(
        value: T,
        valid: &[T],
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::membership::one_of(value, valid, param.into())
    }

    pub fn is_one_of_by<'a, T: Debug>(
        value: T,
        valid: &[T],
        equals: impl Fn(&T, &T) -> bool,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::membership::one_of_by(value, valid, equals, param.into())
    }

    pub fn is_one_of_str<'s, 'a>(
        value: &'s str,
        valid: &[&str],
        comparison: StringComparison,
        param: impl Into<Param<'a>>,
    ) -> Result<&'s str> {
        guard::membership::one_of_str(value, valid, comparison, param.into())
    }

    // Pattern

    pub fn matches<'a, S: AsRef<str>>(
        value: S,
        pattern: &Regex,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::pattern::matches(value, pattern, param.into())
    }

    // Streams

    pub fn can_read<'a, S: StreamCapabilities>(stream: S, param: impl Into<Param<'a>>) -> Result<S> {
        guard::stream::can_read(stream, param.into())
    }

    pub fn can_write<'a, S: StreamCapabilities>(stream: S, param: impl Into<Param<'a>>) -> Result<S> {
        guard::stream::can_write(stream, param.into())
    }

    pub fn can_seek<'a, S: StreamCapabilities>(stream: S, param: impl Into<Param<'a>>) -> Result<S> {
        guard::stream::can_seek(stream, param.into())
    }

    pub fn is_at_start_position<'a, S: StreamCapabilities>(
        stream: S,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::stream::at_start_position(stream, param.into())
    }
}
