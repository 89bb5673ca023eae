/*!
 * Locale-invariant rendering of labels, values and type names in messages.
 *
 * Values are rendered with `Debug`, which never depends on the host locale:
 * floats always use `.`, strings are quoted, and chrono types print ISO-8601.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Debug;

static MODULE_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Za-z_][A-Za-z0-9_]*::)+").unwrap()
});

/// Wrap a parameter label in double quotes
pub fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Type name without module paths, e.g. `Cursor<Vec<u8>>`
pub fn short_type_name<T: ?Sized>() -> String {
    MODULE_PATH_REGEX
        .replace_all(std::any::type_name::<T>(), "")
        .into_owned()
}

/// Render a slice as `[a, b, c]`
pub fn value_list<T: Debug>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", items.join(", "))
}
