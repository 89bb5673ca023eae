/*!
 * Label-capturing macros.
 *
 * The plain functions take the parameter label explicitly. These macros fill
 * it in from the source text of the checked expression with `stringify!`.
 */

/// Run a `Check` function, labelling the first argument with its own source text.
///
/// ```
/// use argguard::{bounds, check};
///
/// let count = 3;
/// let (low, high) = (1, 10);
/// assert_eq!(check!(is_positive(count)).unwrap(), 3);
/// assert_eq!(check!(is_inclusive_between(count, bounds!(low, high))).unwrap(), 3);
///
/// let error = check!(is_negative(count), "count must be negative").unwrap_err();
/// assert_eq!(error.param(), "count");
/// assert_eq!(error.message(), "count must be negative");
/// ```
#[macro_export]
macro_rules! check {
    ($op:ident :: < $($generic:ty),+ > ( $value:expr $(, $arg:expr)* $(,)? ) $(, $message:expr)? $(,)?) => {
        $crate::Check::$op::<$($generic),+>(
            $value $(, $arg)*,
            $crate::Param::new(stringify!($value)) $(.with_message($message))?
        )
    };
    ($op:ident ( $value:expr $(, $arg:expr)* $(,)? ) $(, $message:expr)? $(,)?) => {
        $crate::Check::$op(
            $value $(, $arg)*,
            $crate::Param::new(stringify!($value)) $(.with_message($message))?
        )
    };
}

/// Run a `Should` method, labelling the first argument with its own source text.
///
/// ```
/// use argguard::should;
///
/// let name = "ada";
/// assert_eq!(should!(not_be_blank(name)).unwrap(), "ada");
/// ```
#[macro_export]
macro_rules! should {
    ($op:ident :: < $($generic:ty),+ > ( $value:expr $(, $arg:expr)* $(,)? ) $(, $message:expr)? $(,)?) => {
        $crate::Should.$op::<$($generic),+>(
            $value $(, $arg)*,
            $crate::Param::new(stringify!($value)) $(.with_message($message))?
        )
    };
    ($op:ident ( $value:expr $(, $arg:expr)* $(,)? ) $(, $message:expr)? $(,)?) => {
        $crate::Should.$op(
            $value $(, $arg)*,
            $crate::Param::new(stringify!($value)) $(.with_message($message))?
        )
    };
}

/// Build `Bounds` labelled with the source text of both expressions.
#[macro_export]
macro_rules! bounds {
    ($min:expr, $max:expr $(,)?) => {
        $crate::Bounds::new($min, stringify!($min), $max, stringify!($max))
    };
}

/// Implement `DeclaredEnum` for a fieldless enum from its list of variants.
///
/// ```
/// use argguard::{declared_enum, Check, ErrorKind};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color { Red = 0, Green = 1, Blue = 2 }
/// declared_enum!(Color { Red, Green, Blue });
///
/// assert_eq!(Check::is_in_enum::<Color, _>(1, "color").unwrap(), 1);
/// assert_eq!(Check::is_in_enum::<Color, _>(5, "color").unwrap_err().kind(), ErrorKind::InvalidEnum);
/// ```
#[macro_export]
macro_rules! declared_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::DeclaredEnum for $name {
            const MEMBERS: &'static [Self] = &[$($name::$variant),+];

            fn discriminant(self) -> i64 {
                self as i64
            }
        }
    };
}
