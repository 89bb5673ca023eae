use regex::Regex;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;

/// Require `value` to match `pattern` somewhere (anchor the pattern for a full match)
pub fn matches<S: AsRef<str>>(value: S, pattern: &Regex, param: Param<'_>) -> Result<S> {
    if pattern.is_match(value.as_ref()) {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::InvalidArgument,
        param.name(),
        param.message(),
        || format!("Argument {} was not in required format.", param.name()),
    ))
}
