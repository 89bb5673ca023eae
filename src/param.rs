/*!
 * Parameter labels and range bounds passed to every check.
 */

/// Label of the argument under test, plus an optional replacement message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    name: &'a str,
    message: Option<&'a str>,
}

impl<'a> Param<'a> {
    /// Create a label with the generated message
    pub const fn new(name: &'a str) -> Self {
        Self { name, message: None }
    }

    /// Replace the generated failure message; an empty message keeps the generated one
    pub const fn with_message(self, message: &'a str) -> Self {
        Self {
            name: self.name,
            message: Some(message),
        }
    }

    /// Parameter label
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Custom message, if any
    pub fn message(&self) -> Option<&'a str> {
        self.message
    }
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(name: &'a str) -> Self {
        Self::new(name)
    }
}

impl<'a> From<&'a String> for Param<'a> {
    fn from(name: &'a String) -> Self {
        Self::new(name.as_str())
    }
}

/// Minimum and maximum of a range, each with its own label.
///
/// The labels name the bounds when they are given in the wrong order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<'a, T> {
    /// Lower bound
    pub min: T,
    /// Upper bound
    pub max: T,
    /// Label of the lower bound
    pub min_name: &'a str,
    /// Label of the upper bound
    pub max_name: &'a str,
}

impl<'a, T> Bounds<'a, T> {
    pub const fn new(min: T, min_name: &'a str, max: T, max_name: &'a str) -> Self {
        Self {
            min,
            max,
            min_name,
            max_name,
        }
    }
}
