/*!
 * Fluent calling convention: `Should.be_positive(count, "count")` or
 * `It::SHOULD.be_positive(count, "count")`.
 *
 * Every method forwards to the same core as `Check`, so both forms accept and
 * reject exactly the same inputs with the same errors.
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

/// Entry point of the fluent form
pub struct It;

impl It {
    pub const SHOULD: Should = Should;

    pub const fn should() -> Should {
        Should
    }
}

/// Fluent-style guard clauses
#[derive(Debug, Clone, Copy, Default)]
pub struct Should;

impl Should {
    pub fn not_be_null<'a, T>(self, value: Option<T>, param: impl Into<Param<'a>>) -> Result<T> {
        guard::presence::not_null(value, param.into())
    }

    pub fn not_be_default<'a, T: Default + PartialEq>(
        self,
        value: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::presence::not_default(value, param.into())
    }

    pub fn not_be_default_if_present<'a, T: Default + PartialEq>(
        self,
        value: Option<T>,
        param: impl Into<Param<'a>>,
    ) -> Result<Option<T>> {
        guard::presence::not_default_if_present(value, param.into())
    }

    pub fn not_be_null_or_default<'a, T: Default + PartialEq>(
        self,
        value: Option<T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::presence::not_null_or_default(value, param.into())
    }

    pub fn not_be_empty<'a, C: Emptiable>(self, value: C, param: impl Into<Param<'a>>) -> Result<C> {
        guard::emptiness::not_empty(value, param.into())
    }

    pub fn not_be_null_or_empty<'a, C: Emptiable>(
        self,
        value: Option<C>,
        param: impl Into<Param<'a>>,
    ) -> Result<C> {
        guard::emptiness::not_null_or_empty(value, param.into())
    }

    pub fn not_be_empty_iter<'a, I: Iterator>(
        self,
        iter: I,
        param: impl Into<Param<'a>>,
    ) -> Result<Peekable<I>> {
        guard::emptiness::not_empty_iter(iter, param.into())
    }

    pub fn not_be_blank<'a, S: AsRef<str>>(self, value: S, param: impl Into<Param<'a>>) -> Result<S> {
        guard::emptiness::not_blank(value, param.into())
    }

    pub fn not_be_null_or_whitespace<'a, S: AsRef<str>>(
        self,
        value: Option<S>,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::emptiness::not_null_or_whitespace(value, param.into())
    }

    pub fn have_no_nulls<'v, 'a, T>(
        self,
        values: &'v [Option<T>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<T>]> {
        guard::elements::no_nulls(values, param.into())
    }

    pub fn have_no_empty_elements<'v, 'a, S: AsRef<str>>(
        self,
        values: &'v [Option<S>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<S>]> {
        guard::elements::no_empty_elements(values, param.into())
    }

    pub fn have_no_blank_elements<'v, 'a, S: AsRef<str>>(
        self,
        values: &'v [Option<S>],
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [Option<S>]> {
        guard::elements::no_blank_elements(values, param.into())
    }

    pub fn be_equal_to<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::equal_to(value, expected, param.into())
    }

    pub fn be_less_than<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::less_than(value, expected, param.into())
    }

    pub fn be_less_than_or_equal_to<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::less_than_or_equal_to(value, expected, param.into())
    }

    pub fn be_greater_than<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::greater_than(value, expected, param.into())
    }

    pub fn be_greater_than_or_equal_to<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        expected: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::comparison::greater_than_or_equal_to(value, expected, param.into())
    }

    pub fn have_valid_range<T: PartialOrd>(self, bounds: &Bounds<'_, T>) -> Result<()> {
        guard::range::validate_range(bounds)
    }

    pub fn be_inclusive_between<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::Inclusive, param.into())
    }

    pub fn be_exclusive_between<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::Exclusive, param.into())
    }

    pub fn be_left_opened_between<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::LeftOpen, param.into())
    }

    pub fn be_right_opened_between<'a, T: PartialOrd + Debug>(
        self,
        value: T,
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::range::between(value, bounds, Interval::RightOpen, param.into())
    }

    pub fn have_all_items_in_range<'v, 'a, T: PartialOrd + Debug>(
        self,
        values: &'v [T],
        bounds: Bounds<'_, T>,
        param: impl Into<Param<'a>>,
    ) -> Result<&'v [T]> {
        guard::range::all_items_in_range(values, bounds, param.into())
    }

    pub fn be_positive<'a, T: Numeric>(self, value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::positive(value, param.into())
    }

    pub fn be_positive_or_zero<'a, T: Numeric>(
        self,
        value: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::sign::positive_or_zero(value, param.into())
    }

    pub fn be_negative<'a, T: Numeric>(self, value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::sign::negative(value, param.into())
    }

    pub fn be_negative_or_zero<'a, T: Numeric>(
        self,
        value: T,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::sign::negative_or_zero(value, param.into())
    }

    pub fn be_nan<'a, T: FloatingPoint>(self, value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::nan::nan(value, param.into())
    }

    pub fn not_be_nan<'a, T: FloatingPoint>(self, value: T, param: impl Into<Param<'a>>) -> Result<T> {
        guard::nan::not_nan(value, param.into())
    }

    pub fn be_in_enum<'a, E: DeclaredEnum, V: Copy + Into<i64>>(
        self,
        raw: V,
        param: impl Into<Param<'a>>,
    ) -> Result<V> {
        guard::membership::in_enum::<E, V>(raw, param.into())
    }

    pub fn be_enum_member<'a, E: DeclaredEnum>(
        self,
        value: E,
        param: impl Into<Param<'a>>,
    ) -> Result<E> {
        guard::membership::enum_member(value, param.into())
    }

    pub fn be_one_of<'a, T: PartialEq + Debug>(
        self,
        value: T,
        valid: &[T],
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::membership::one_of(value, valid, param.into())
    }

    pub fn be_one_of_by<'a, T: Debug>(
        self,
        value: T,
        valid: &[T],
        equals: impl Fn(&T, &T) -> bool,
        param: impl Into<Param<'a>>,
    ) -> Result<T> {
        guard::membership::one_of_by(value, valid, equals, param.into())
    }

    pub fn be_one_of_str<'s, 'a>(
        self,
        value: &'s str,
        valid: &[&str],
        comparison: StringComparison,
        param: impl Into<Param<'a>>,
    ) -> Result<&'s str> {
        guard::membership::one_of_str(value, valid, comparison, param.into())
    }

    pub fn match_pattern<'a, S: AsRef<str>>(
        self,
        value: S,
        pattern: &Regex,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::pattern::matches(value, pattern, param.into())
    }

    pub fn support_reading<'a, S: StreamCapabilities>(
        self,
        stream: S,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::stream::can_read(stream, param.into())
    }

    pub fn support_writing<'a, S: StreamCapabilities>(
        self,
        stream: S,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::stream::can_write(stream, param.into())
    }

    pub fn support_seeking<'a, S: StreamCapabilities>(
        self,
        stream: S,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::stream::can_seek(stream, param.into())
    }

    pub fn be_at_start_position<'a, S: StreamCapabilities>(
        self,
        stream: S,
        param: impl Into<Param<'a>>,
    ) -> Result<S> {
        guard::stream::at_start_position(stream, param.into())
    }
}
