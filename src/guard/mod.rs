/*!
 * Shared validation core.
 *
 * Both calling conventions (`Check` and `Should`) delegate here, so the
 * predicates and messages live in exactly one place.
 *
 * - `presence`: null and default values
 * - `emptiness`: empty collections, strings and iterators; blank strings
 * - `elements`: per-element checks over collections of optional values
 * - `comparison`: equal / less / greater against one expected value
 * - `range`: bounds ordering, interval checks, all-items-in-range
 * - `sign`: positive / negative over `Numeric` types
 * - `nan`: NaN checks for floating-point types
 * - `membership`: declared enum members and sets of valid values
 * - `pattern`: regular expression matches
 * - `stream`: I/O stream capabilities
 */

pub mod comparison;
pub mod elements;
pub mod emptiness;
pub mod membership;
pub mod nan;
pub mod pattern;
pub mod presence;
pub mod range;
pub mod sign;
pub mod stream;

pub use emptiness::Emptiable;
pub use membership::{DeclaredEnum, StringComparison};
pub use nan::FloatingPoint;
pub use range::Interval;
pub use sign::Numeric;
pub use stream::StreamCapabilities;
