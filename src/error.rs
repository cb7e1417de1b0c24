use thiserror::Error;

use crate::range::Range;

/// Error produced when a value does not fit the range of the bounded
/// integer it is assigned to, under a policy that rejects such values.
///
/// Carries the offending value and the violated range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("got a value of {value} but expected a value in the range [{min}, {max}]")]
pub struct RangeError {
    value: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    #[inline]
    pub fn new(value: i128, min: i128, max: i128) -> Self {
        RangeError { value, min, max }
    }

    /// The value that was rejected.
    #[inline]
    pub fn value(&self) -> i128 { self.value }

    /// The range the value was expected in.
    #[inline]
    pub fn range(&self) -> Range { Range::new(self.min, self.max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_value_and_range() {
        let err = RangeError::new(42, 0, 10);
        assert_eq!(err.to_string(),
                   "got a value of 42 but expected a value in the range [0, 10]");
        assert_eq!(err.value(), 42);
        assert_eq!(err.range(), Range::new(0, 10));
    }
}
