/*!
 * NaN checks for IEEE 754 floating-point types.
 */

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::quoted;

pub trait FloatingPoint: Copy {
    fn is_nan(self) -> bool;
}

impl FloatingPoint for f32 {
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl FloatingPoint for f64 {
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

pub fn not_nan<T: FloatingPoint>(value: T, param: Param<'_>) -> Result<T> {
    if !value.is_nan() {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::OutOfRange,
        param.name(),
        param.message(),
        || format!("The argument {} cannot be NaN.", quoted(param.name())),
    ))
}

pub fn nan<T: FloatingPoint>(value: T, param: Param<'_>) -> Result<T> {
    if value.is_nan() {
        return Ok(value);
    }
    Err(ArgumentError::raise(
        ErrorKind::InvalidArgument,
        param.name(),
        param.message(),
        || format!("The argument {} must be a NaN.", quoted(param.name())),
    ))
}
