/*!
 * Emptiness and blank-string checks.
 */

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::iter::Peekable;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::quoted;

use super::presence::not_null;

/// Anything that can report whether it holds no elements or characters
pub trait Emptiable {
    fn is_empty(&self) -> bool;
}

impl Emptiable for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Emptiable for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Emptiable for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> Emptiable for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiable for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiable for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> Emptiable for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> Emptiable for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Emptiable for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Emptiable for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<E: Emptiable + ?Sized> Emptiable for &E {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<E: Emptiable + ?Sized> Emptiable for &mut E {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<E: Emptiable + ?Sized> Emptiable for Box<E> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

fn empty_error(param: Param<'_>) -> ArgumentError {
    ArgumentError::raise(ErrorKind::InvalidArgument, param.name(), param.message(), || {
        format!("Required argument {} was empty.", param.name())
    })
}

/// Require at least one element or character
pub fn not_empty<C: Emptiable>(value: C, param: Param<'_>) -> Result<C> {
    if value.is_empty() {
        return Err(empty_error(param));
    }
    Ok(value)
}

pub fn not_null_or_empty<C: Emptiable>(value: Option<C>, param: Param<'_>) -> Result<C> {
    let value = not_null(value, param)?;
    not_empty(value, param)
}

/// Require a lazy sequence to yield at least one item.
///
/// The probed item is kept in the returned `Peekable`, so the caller still
/// sees the whole sequence.
pub fn not_empty_iter<I: Iterator>(iter: I, param: Param<'_>) -> Result<Peekable<I>> {
    let mut iter = iter.peekable();
    if iter.peek().is_none() {
        return Err(empty_error(param));
    }
    Ok(iter)
}

pub(crate) fn is_whitespace(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Require a string with at least one non-whitespace character
pub fn not_blank<S: AsRef<str>>(value: S, param: Param<'_>) -> Result<S> {
    if value.as_ref().is_empty() {
        return Err(empty_error(param));
    }
    if is_whitespace(value.as_ref()) {
        return Err(ArgumentError::raise(
            ErrorKind::InvalidArgument,
            param.name(),
            param.message(),
            || format!("Required argument {} was blank.", quoted(param.name())),
        ));
    }
    Ok(value)
}

pub fn not_null_or_whitespace<S: AsRef<str>>(value: Option<S>, param: Param<'_>) -> Result<S> {
    let value = not_null(value, param)?;
    not_blank(value, param)
}
