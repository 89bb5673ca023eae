/*!
 * Sign checks over numeric types.
 */

use std::fmt::Debug;
use std::time::Duration;

use crate::errors::{ArgumentError, ErrorKind, Result};
use crate::param::Param;
use crate::render::quoted;

/// A type with an ordered zero value
pub trait Numeric: PartialOrd + Debug + Sized {
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);
impl_numeric!(Duration::ZERO => Duration);

#[cfg(feature = "decimal")]
impl_numeric!(rust_decimal::Decimal::ZERO => rust_decimal::Decimal);

fn sign_error(param: Param<'_>, generated: impl FnOnce() -> String) -> ArgumentError {
    ArgumentError::raise(ErrorKind::OutOfRange, param.name(), param.message(), generated)
}

/// Require `value > 0`
pub fn positive<T: Numeric>(value: T, param: Param<'_>) -> Result<T> {
    if value > T::ZERO {
        return Ok(value);
    }
    Err(sign_error(param, || {
        format!("The argument {} cannot be non positive.", quoted(param.name()))
    }))
}

/// Require `value >= 0`
pub fn positive_or_zero<T: Numeric>(value: T, param: Param<'_>) -> Result<T> {
    if value >= T::ZERO {
        return Ok(value);
    }
    Err(sign_error(param, || {
        format!("The argument {} cannot be negative.", quoted(param.name()))
    }))
}

/// Require `value < 0`
pub fn negative<T: Numeric>(value: T, param: Param<'_>) -> Result<T> {
    if value < T::ZERO {
        return Ok(value);
    }
    Err(sign_error(param, || {
        format!("The argument {} cannot be non negative.", quoted(param.name()))
    }))
}

/// Require `value <= 0`
pub fn negative_or_zero<T: Numeric>(value: T, param: Param<'_>) -> Result<T> {
    if value <= T::ZERO {
        return Ok(value);
    }
    Err(sign_error(param, || {
        format!("The argument {} cannot be positive.", quoted(param.name()))
    }))
}
