/*!
 * # argguard - guard clauses for function arguments
 *
 * Stateless precondition checks that either return the validated value
 * unchanged or fail with a descriptive `ArgumentError`.
 *
 * ## Features
 *
 * - Presence checks (`Option`, default values)
 * - Empty and blank checks for strings, collections and iterators
 * - Element checks for collections of optional values
 * - Comparison and range checks for any `PartialOrd` type
 * - Sign and NaN checks for numeric types
 * - Enum membership and is-one-of checks
 * - Regular expression matches
 * - I/O stream capability checks
 *
 * ## Calling conventions
 *
 * Both forms share one implementation:
 *
 * ```
 * use argguard::{Check, Should, check};
 *
 * fn resize(width: u32) -> argguard::Result<u32> {
 *     let width = Check::is_positive(width, "width")?;
 *     let width = Should.be_less_than_or_equal_to(width, 4096, "width")?;
 *     Ok(width)
 * }
 *
 * let height = 0u32;
 * assert!(resize(800).is_ok());
 * assert_eq!(check!(is_positive(height)).unwrap_err().param(), "height");
 * ```
 *
 * ## Architecture
 *
 * - `errors`: `ArgumentError`, `ErrorKind`
 * - `param`: parameter labels and range bounds
 * - `render`: locale-invariant message rendering
 * - `guard`: the shared validation core
 * - `check`: static form (`Check::is_*`)
 * - `should`: fluent form (`Should.be_*`, `It::SHOULD`)
 * - `macros`: `check!`, `should!`, `bounds!`, `declared_enum!`
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

pub mod errors;
pub mod param;
pub mod render;
mod guard;
pub mod check;
pub mod should;
#[macro_use]
mod macros;

pub use check::Check;
pub use errors::{ArgumentError, ErrorKind, Result};
pub use guard::{DeclaredEnum, Emptiable, FloatingPoint, Numeric, StreamCapabilities, StringComparison};
pub use param::{Bounds, Param};
pub use should::{It, Should};
